mod app_context;
mod config_warnings;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;

use anyhow::Context;
use portal_config::PortalConfig;

/// Load `.env`, then the layered config, and reject out-of-range values.
pub fn load_config() -> anyhow::Result<PortalConfig> {
    let config = PortalConfig::load_with_dotenv().context("failed to load portal configuration")?;
    config.validate().context("invalid portal configuration")?;
    Ok(config)
}
