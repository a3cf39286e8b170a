use clap::{Args, Subcommand};
use portal_knowledge::Subject;

/// Knowledge base commands. These never touch the network.
#[derive(Clone, Debug, Subcommand)]
pub enum KbCommands {
    /// Look up one vocabulary term (exact, case-sensitive).
    Lookup(KbLookupArgs),
    /// List every vocabulary term.
    Keys,
    /// List the problem-solving scenarios.
    Scenarios,
    /// Show topic fact groups, optionally for one subject.
    Topics(KbTopicsArgs),
    /// Find vocabulary terms mentioned in a question.
    Mentions(KbMentionsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct KbLookupArgs {
    /// Vocabulary term, e.g. "photosynthesis".
    pub key: String,
}

#[derive(Clone, Debug, Args)]
pub struct KbTopicsArgs {
    /// animals, plants, earth_science, physical_science or engineering.
    pub subject: Option<Subject>,
}

#[derive(Clone, Debug, Args)]
pub struct KbMentionsArgs {
    /// Free text to scan.
    pub text: String,
}
