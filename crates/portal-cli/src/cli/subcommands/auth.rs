use clap::Subcommand;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with Google (opens a browser unless a session is stored).
    Login,
    /// Sign out and revoke the stored Google session.
    Logout,
    /// Show the gateway mode and stored session.
    Status,
}
