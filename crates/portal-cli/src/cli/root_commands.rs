use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, ClassroomCommands, DriveCommands, KbCommands, MailCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Science vocabulary, scenarios and topic facts.
    Kb {
        #[command(subcommand)]
        action: KbCommands,
    },
    /// Google sign-in.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Google Drive files.
    Drive {
        #[command(subcommand)]
        action: DriveCommands,
    },
    /// Google Classroom courses and rosters.
    Classroom {
        #[command(subcommand)]
        action: ClassroomCommands,
    },
    /// Send mail through Gmail.
    Mail {
        #[command(subcommand)]
        action: MailCommands,
    },
}
