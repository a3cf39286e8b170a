//! # Integration tests for portal-auth
//!
//! The live test needs real Google credentials and is skipped (not failed)
//! when they are missing.
//!
//! ## Required environment variables
//!
//! ```bash
//! PORTAL_GOOGLE__CLIENT_ID=1234-abc.apps.googleusercontent.com
//! PORTAL_GOOGLE__API_KEY=AIza...
//! ```
//!
//! ## Run
//!
//! ```bash
//! cargo test -p portal-auth --test live_auth -- --nocapture
//! ```

use std::time::Duration;

use portal_auth::{AuthError, AuthProvider, GoogleAuthProvider, ProviderConfig};
use portal_config::GoogleConfig;

fn load_env() {
    let workspace_env = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.join(".env"));

    if let Some(env_path) = workspace_env {
        let _ = dotenvy::from_path(&env_path);
    }
}

fn live_google_config() -> Option<GoogleConfig> {
    load_env();
    let client_id = std::env::var("PORTAL_GOOGLE__CLIENT_ID").ok()?;
    let api_key = std::env::var("PORTAL_GOOGLE__API_KEY").ok()?;
    if !client_id.ends_with(".apps.googleusercontent.com") || api_key.is_empty() {
        return None;
    }
    Some(GoogleConfig {
        client_id,
        api_key,
        ..Default::default()
    })
}

fn provider() -> GoogleAuthProvider {
    GoogleAuthProvider::new(reqwest::Client::new(), Duration::from_secs(5))
}

#[tokio::test]
async fn initialize_rejects_unconfigured_client() {
    let config = ProviderConfig::from_google(&GoogleConfig::default());
    let err = provider().initialize(&config).await.unwrap_err();
    assert!(matches!(err, AuthError::NotConfigured(_)), "got {err:?}");
}

#[tokio::test]
async fn initialize_rejects_missing_redirect_domain() {
    let google = GoogleConfig {
        client_id: "1234-abc.apps.googleusercontent.com".into(),
        authorized_domains: vec!["school.edu".into()],
        ..Default::default()
    };
    let err = provider()
        .initialize(&ProviderConfig::from_google(&google))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::NotConfigured(_)), "got {err:?}");
}

#[tokio::test]
async fn live_initialize_loads_discovery_documents() {
    let Some(google) = live_google_config() else {
        eprintln!("SKIP: PORTAL_GOOGLE__CLIENT_ID / PORTAL_GOOGLE__API_KEY not set");
        return;
    };

    let provider = provider();
    provider
        .initialize(&ProviderConfig::from_google(&google))
        .await
        .expect("discovery documents should load with a valid API key");

    // Nothing signed in yet.
    assert!(matches!(
        provider.access_token().await,
        Err(AuthError::NotAuthenticated)
    ));
}
