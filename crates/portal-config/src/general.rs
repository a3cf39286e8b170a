//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_request_timeout_secs() -> u64 {
    10
}

const fn default_sign_in_timeout_secs() -> u64 {
    120
}

const fn default_demo_fallback() -> bool {
    true
}

const fn default_drive_page_size() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Upper bound for any single remote call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long the interactive browser sign-in may take.
    #[serde(default = "default_sign_in_timeout_secs")]
    pub sign_in_timeout_secs: u64,

    /// Fall back to demo mode when the auth provider cannot be configured.
    #[serde(default = "default_demo_fallback")]
    pub demo_fallback: bool,

    /// Default page size for Drive file listings.
    #[serde(default = "default_drive_page_size")]
    pub drive_page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            sign_in_timeout_secs: default_sign_in_timeout_secs(),
            demo_fallback: default_demo_fallback(),
            drive_page_size: default_drive_page_size(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub const fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub const fn sign_in_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sign_in_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.sign_in_timeout_secs, 120);
        assert!(config.demo_fallback);
        assert_eq!(config.drive_page_size, 10);
        assert_eq!(config.request_timeout(), std::time::Duration::from_secs(10));
    }
}
