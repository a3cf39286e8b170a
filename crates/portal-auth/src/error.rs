use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Google sign-in is not configured: {0}")]
    NotConfigured(String),

    #[error("auth client initialization failed: {0}")]
    Initialization(String),

    #[error("not signed in")]
    NotAuthenticated,

    #[error("session expired, sign in again")]
    TokenExpired,

    #[error("browser sign-in failed: {0}")]
    BrowserFlowFailed(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("token revocation failed: {0}")]
    Revoke(String),

    #[error("profile fetch failed: {0}")]
    Profile(String),

    #[error("{0}")]
    Other(String),
}
