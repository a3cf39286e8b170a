//! # portal-auth
//!
//! Google OAuth 2.0 sign-in for the STEM portal.
//!
//! Provides the [`AuthProvider`] seam the session gateway drives, and the
//! Google implementation of it: browser consent over a loopback redirect
//! (`tiny_http` + `open`, PKCE), OS keychain token storage (`keyring`) with
//! a file fallback, refresh, and revocation.

pub mod browser_flow;
pub mod error;
pub mod google;
pub mod oauth;
pub mod provider;
mod refresh;
pub mod token;
pub mod token_store;

pub use error::AuthError;
pub use google::GoogleAuthProvider;
pub use provider::{AuthProvider, DISCOVERY_DOCS, ProviderConfig, ProviderEvent, SCOPES};
pub use token::OAuthToken;
pub use token_store::TokenSource;

/// Which tier a stored Google session lives in, if any.
#[must_use]
pub fn stored_session_source() -> Option<TokenSource> {
    token_store::load_with_source().map(|(_, source)| source)
}

/// Clear stored credentials without contacting Google.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn forget_stored_session() -> Result<(), AuthError> {
    token_store::delete()
}
