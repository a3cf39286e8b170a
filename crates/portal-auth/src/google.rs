use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use portal_config::PLACEHOLDER_CLIENT_ID;
use portal_core::Profile;
use tokio::sync::{Mutex, broadcast};

use crate::browser_flow;
use crate::error::AuthError;
use crate::oauth;
use crate::provider::{AuthProvider, ProviderConfig, ProviderEvent};
use crate::refresh::{self, Freshness};
use crate::token::OAuthToken;
use crate::token_store;

/// Host the loopback redirect listens on. Must be an authorized domain.
const REDIRECT_DOMAIN: &str = "127.0.0.1";
const EVENT_CAPACITY: usize = 16;

/// [`AuthProvider`] backed by Google's OAuth 2.0 installed-app flow.
pub struct GoogleAuthProvider {
    http: reqwest::Client,
    sign_in_timeout: Duration,
    config: OnceLock<ProviderConfig>,
    token: Mutex<Option<OAuthToken>>,
    events: broadcast::Sender<ProviderEvent>,
}

impl GoogleAuthProvider {
    #[must_use]
    pub fn new(http: reqwest::Client, sign_in_timeout: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            http,
            sign_in_timeout,
            config: OnceLock::new(),
            token: Mutex::new(None),
            events,
        }
    }

    fn config(&self) -> Result<&ProviderConfig, AuthError> {
        self.config
            .get()
            .ok_or_else(|| AuthError::Initialization("Google provider not initialized".into()))
    }

    fn end_session(&self) {
        // No receivers is fine.
        let _ = self.events.send(ProviderEvent::SessionEnded);
    }

    async fn signed_in_profile(&self, token: OAuthToken) -> Result<Profile, AuthError> {
        let profile = oauth::fetch_profile(&self.http, &token.access_token).await?;
        *self.token.lock().await = Some(token);
        Ok(profile)
    }
}

/// Reject configs that cannot possibly complete a sign-in.
pub(crate) fn check_config(config: &ProviderConfig) -> Result<(), AuthError> {
    let client_id = config.client_id.trim();
    if client_id.is_empty() || client_id == PLACEHOLDER_CLIENT_ID {
        return Err(AuthError::NotConfigured(
            "set google.client_id (or PORTAL_GOOGLE__CLIENT_ID)".into(),
        ));
    }
    if !config.authorized_domains.iter().any(|d| d == REDIRECT_DOMAIN) {
        return Err(AuthError::NotConfigured(format!(
            "{REDIRECT_DOMAIN} must be listed in google.authorized_domains for the sign-in redirect"
        )));
    }
    Ok(())
}

fn discovery_url(doc: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        doc.to_string()
    } else {
        format!("{doc}?key={}", urlencoding::encode(api_key))
    }
}

#[async_trait]
impl AuthProvider for GoogleAuthProvider {
    async fn initialize(&self, config: &ProviderConfig) -> Result<(), AuthError> {
        if self.config.get().is_some() {
            return Ok(());
        }
        check_config(config)?;

        for doc in &config.discovery_docs {
            let resp = self
                .http
                .get(discovery_url(doc, &config.api_key))
                .send()
                .await
                .map_err(|e| AuthError::Initialization(format!("{doc}: {e}")))?;
            if !resp.status().is_success() {
                return Err(AuthError::Initialization(format!(
                    "{doc}: HTTP {}",
                    resp.status().as_u16()
                )));
            }
            tracing::debug!(doc, "discovery document loaded");
        }

        let _ = self.config.set(config.clone());
        tracing::info!(scopes = config.scopes.len(), "Google auth provider initialized");
        Ok(())
    }

    async fn sign_in(&self) -> Result<Profile, AuthError> {
        let config = self.config()?;

        if let Some(token) =
            refresh::check_stored_token(&self.http, &config.client_id, &config.client_secret)
                .await?
        {
            match self.signed_in_profile(token).await {
                Ok(profile) => {
                    tracing::info!("signed in from stored Google session");
                    return Ok(profile);
                }
                Err(AuthError::TokenExpired) => {
                    tracing::warn!("stored token rejected by Google; starting browser sign-in");
                }
                Err(error) => return Err(error),
            }
        }

        let token = browser_flow::login(
            &self.http,
            &config.client_id,
            &config.client_secret,
            &config.scope_string(),
            self.sign_in_timeout,
        )
        .await?;
        token_store::store(&token)?;
        self.signed_in_profile(token).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let token = self.token.lock().await.take().or_else(token_store::load);
        let revoked = match token {
            Some(token) => {
                let credential = token.refresh_token.as_deref().unwrap_or(&token.access_token);
                oauth::revoke(&self.http, credential).await
            }
            None => Ok(()),
        };
        token_store::delete()?;
        revoked
    }

    async fn access_token(&self) -> Result<String, AuthError> {
        let config = self.config()?;
        let mut guard = self.token.lock().await;
        let Some(token) = guard.clone() else {
            return Err(AuthError::NotAuthenticated);
        };

        match refresh::ensure_fresh(&self.http, &config.client_id, &config.client_secret, token)
            .await
        {
            Ok(Freshness::Valid(token) | Freshness::Refreshed(token)) => {
                let access = token.access_token.clone();
                *guard = Some(token);
                Ok(access)
            }
            Err(AuthError::TokenExpired) => {
                *guard = None;
                drop(guard);
                if let Err(error) = token_store::delete() {
                    tracing::warn!(%error, "failed to clear expired credentials");
                }
                tracing::warn!("Google session expired");
                self.end_session();
                Err(AuthError::TokenExpired)
            }
            Err(error) => Err(error),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(client_id: &str, domains: &[&str]) -> ProviderConfig {
        ProviderConfig {
            api_key: String::new(),
            client_id: client_id.into(),
            client_secret: String::new(),
            authorized_domains: domains.iter().map(ToString::to_string).collect(),
            discovery_docs: Vec::new(),
            scopes: Vec::new(),
        }
    }

    #[test]
    fn placeholder_client_id_is_not_configured() {
        let err = check_config(&config(PLACEHOLDER_CLIENT_ID, &["127.0.0.1"])).unwrap_err();
        assert!(matches!(err, AuthError::NotConfigured(_)));
        assert!(matches!(
            check_config(&config("  ", &["127.0.0.1"])),
            Err(AuthError::NotConfigured(_))
        ));
    }

    #[test]
    fn redirect_host_must_be_authorized() {
        let err = check_config(&config("id", &["localhost"])).unwrap_err();
        assert!(err.to_string().contains("authorized_domains"));
        assert!(check_config(&config("id", &["localhost", "127.0.0.1"])).is_ok());
    }

    #[test]
    fn discovery_url_appends_encoded_key() {
        assert_eq!(discovery_url("https://d/rest", ""), "https://d/rest");
        assert_eq!(discovery_url("https://d/rest", "a b"), "https://d/rest?key=a%20b");
    }

    #[tokio::test]
    async fn operations_before_initialize_fail() {
        let provider = GoogleAuthProvider::new(reqwest::Client::new(), Duration::from_secs(1));
        assert!(matches!(provider.sign_in().await, Err(AuthError::Initialization(_))));
        assert!(matches!(provider.access_token().await, Err(AuthError::Initialization(_))));
    }

    #[tokio::test]
    async fn initialize_with_no_docs_succeeds_offline() {
        let provider = GoogleAuthProvider::new(reqwest::Client::new(), Duration::from_secs(1));
        provider.initialize(&config("id", &["127.0.0.1"])).await.unwrap();
        assert!(matches!(provider.access_token().await, Err(AuthError::NotAuthenticated)));
    }
}
