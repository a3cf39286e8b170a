//! # portal-config
//!
//! Layered configuration loading for the STEM portal using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PORTAL_*` prefix, `__` as separator)
//! 2. Project-level `.portal/config.toml`
//! 3. User-level `~/.config/stem-portal/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PORTAL_GOOGLE__CLIENT_ID` -> `google.client_id`,
//! `PORTAL_GENERAL__REQUEST_TIMEOUT_SECS` -> `general.request_timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use portal_config::PortalConfig;
//!
//! let config = PortalConfig::load_with_dotenv().expect("config");
//! if !config.google.is_configured() {
//!     println!("no Google client id; the portal will run in demo mode");
//! }
//! ```

mod error;
mod general;
mod google;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use google::{GoogleConfig, PLACEHOLDER_CLIENT_ID};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PortalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".portal/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PORTAL_").split("__"))
    }

    /// Reject values the gateway cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.request_timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.general.sign_in_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.sign_in_timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(1..=1000).contains(&self.general.drive_page_size) {
            return Err(ConfigError::InvalidValue {
                field: "general.drive_page_size".into(),
                reason: format!("{} is outside 1..=1000", self.general.drive_page_size),
            });
        }
        Ok(())
    }

    /// Require the Google section to carry a usable client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when it does not.
    pub fn require_google(&self) -> Result<&GoogleConfig, ConfigError> {
        if self.google.is_configured() {
            Ok(&self.google)
        } else {
            Err(ConfigError::NotConfigured {
                section: "google".into(),
            })
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stem-portal").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PortalConfig::default();
        assert!(!config.google.is_configured());
        assert!(config.general.demo_fallback);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn require_google_reports_section() {
        let err = PortalConfig::default().require_google().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "google"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = PortalConfig::default();
        config.general.request_timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.request_timeout_secs"));
    }

    #[test]
    fn oversized_page_is_rejected() {
        let mut config = PortalConfig::default();
        config.general.drive_page_size = 5000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
