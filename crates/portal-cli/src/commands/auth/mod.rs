mod login;
mod logout;
mod status;

use portal_config::PortalConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `portal auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login => login::handle(flags, config).await,
        AuthCommands::Logout => logout::handle(flags, config).await,
        AuthCommands::Status => status::handle(flags, config).await,
    }
}
