use portal_config::PortalConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a gateway-backed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &PortalConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Kb { action } => commands::kb::handle(&action, flags),
        Commands::Auth { action } => commands::auth::handle(&action, flags, config).await,
        Commands::Drive { action } => commands::drive::handle(&action, flags, config).await,
        Commands::Classroom { action } => {
            commands::classroom::handle(&action, flags, config).await
        }
        Commands::Mail { action } => commands::mail::handle(&action, flags, config).await,
    }
}
