//! The seam between the session gateway and an identity provider.

use async_trait::async_trait;
use portal_config::GoogleConfig;
use portal_core::Profile;
use tokio::sync::broadcast;

use crate::error::AuthError;

/// Discovery documents for the APIs the portal calls.
pub const DISCOVERY_DOCS: [&str; 3] = [
    "https://www.googleapis.com/discovery/v1/apis/drive/v3/rest",
    "https://www.googleapis.com/discovery/v1/apis/classroom/v1/rest",
    "https://www.googleapis.com/discovery/v1/apis/gmail/v1/rest",
];

/// Permissions requested at sign-in.
pub const SCOPES: [&str; 6] = [
    "https://www.googleapis.com/auth/drive",
    "https://www.googleapis.com/auth/classroom.courses.readonly",
    "https://www.googleapis.com/auth/classroom.rosters.readonly",
    "https://www.googleapis.com/auth/gmail.send",
    "https://www.googleapis.com/auth/userinfo.profile",
    "https://www.googleapis.com/auth/userinfo.email",
];

/// Everything a provider needs to configure itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub client_id: String,
    pub client_secret: String,
    pub authorized_domains: Vec<String>,
    pub discovery_docs: Vec<String>,
    pub scopes: Vec<String>,
}

impl ProviderConfig {
    /// The portal's fixed discovery documents and scopes, with credentials
    /// taken from config.
    #[must_use]
    pub fn from_google(google: &GoogleConfig) -> Self {
        Self {
            api_key: google.api_key.clone(),
            client_id: google.client_id.clone(),
            client_secret: google.client_secret.clone(),
            authorized_domains: google.authorized_domains.clone(),
            discovery_docs: DISCOVERY_DOCS.iter().map(ToString::to_string).collect(),
            scopes: SCOPES.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// Session changes the provider noticed on its own, outside an explicit
/// `sign_in`/`sign_out` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    SessionStarted(Profile),
    SessionEnded,
}

/// An identity provider the gateway signs in through.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Acquire and configure the provider. Called once at startup.
    async fn initialize(&self, config: &ProviderConfig) -> Result<(), AuthError>;

    /// Run the interactive sign-in and return the user's profile.
    async fn sign_in(&self) -> Result<Profile, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Current bearer credential for API calls.
    async fn access_token(&self) -> Result<String, AuthError>;

    /// Receive [`ProviderEvent`]s.
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn provider_config_carries_fixed_scopes_and_docs() {
        let google = GoogleConfig {
            client_id: "id.apps.googleusercontent.com".into(),
            api_key: "key".into(),
            ..Default::default()
        };
        let config = ProviderConfig::from_google(&google);

        assert_eq!(config.client_id, "id.apps.googleusercontent.com");
        assert_eq!(config.discovery_docs.len(), 3);
        assert_eq!(config.scopes.len(), 6);
        assert!(config.scope_string().contains("/auth/gmail.send "));
        assert!(!config.scope_string().contains(','));
    }
}
