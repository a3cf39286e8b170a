//! Google OAuth client configuration.

use serde::{Deserialize, Serialize};

/// Value shipped in sample config files; treated the same as an empty id.
pub const PLACEHOLDER_CLIENT_ID: &str = "REPLACE_WITH_YOUR_GOOGLE_CLIENT_ID";

fn default_authorized_domains() -> Vec<String> {
    vec!["localhost".to_string(), "127.0.0.1".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleConfig {
    /// OAuth 2.0 client id from the Google Cloud console.
    #[serde(default)]
    pub client_id: String,

    /// OAuth 2.0 client secret. Installed-app clients still send it on
    /// token exchange even though it is not confidential.
    #[serde(default)]
    pub client_secret: String,

    /// API key attached to discovery document requests.
    #[serde(default)]
    pub api_key: String,

    /// Hosts allowed to receive the OAuth redirect. The sign-in flow redirects
    /// to `127.0.0.1`, so removing it disables live sign-in.
    #[serde(default = "default_authorized_domains")]
    pub authorized_domains: Vec<String>,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            api_key: String::new(),
            authorized_domains: default_authorized_domains(),
        }
    }
}

impl GoogleConfig {
    /// Check if a real client id has been supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let id = self.client_id.trim();
        !id.is_empty() && id != PLACEHOLDER_CLIENT_ID
    }

    /// Exact, case-sensitive membership in `authorized_domains`.
    #[must_use]
    pub fn is_domain_authorized(&self, domain: &str) -> bool {
        self.authorized_domains.iter().any(|d| d == domain)
    }
}
