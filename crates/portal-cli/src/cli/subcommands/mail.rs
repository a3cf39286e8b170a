use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum MailCommands {
    /// Send an HTML message from your account.
    Send(MailSendArgs),
}

#[derive(Clone, Debug, Args)]
pub struct MailSendArgs {
    #[arg(long)]
    pub to: String,
    #[arg(long)]
    pub subject: String,
    /// HTML body.
    #[arg(long)]
    pub body: String,
}
