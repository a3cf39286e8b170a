use crate::error::AuthError;
use crate::oauth;
use crate::token::OAuthToken;
use crate::token_store;

pub(crate) const EXPIRY_BUFFER_SECS: i64 = 60;

/// What [`ensure_fresh`] did with a token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Freshness {
    /// Still valid past the expiry buffer.
    Valid(OAuthToken),
    /// Refreshed and re-stored.
    Refreshed(OAuthToken),
}

impl Freshness {
    pub(crate) fn into_token(self) -> OAuthToken {
        match self {
            Self::Valid(token) | Self::Refreshed(token) => token,
        }
    }
}

/// Return `token` if it is not near expiry, otherwise refresh it.
///
/// # Errors
///
/// Returns `AuthError::TokenExpired` if the token is near expiry and has no
/// refresh token or Google rejects the refresh.
pub(crate) async fn ensure_fresh(
    http: &reqwest::Client,
    client_id: &str,
    client_secret: &str,
    token: OAuthToken,
) -> Result<Freshness, AuthError> {
    if !token.is_near_expiry(EXPIRY_BUFFER_SECS) {
        return Ok(Freshness::Valid(token));
    }
    let Some(refresh_token) = token.refresh_token.as_deref() else {
        tracing::debug!(expires_at = %token.expires_at, "token near expiry and not refreshable");
        return Err(AuthError::TokenExpired);
    };

    tracing::debug!(expires_at = %token.expires_at, "refreshing access token");
    let refreshed = oauth::refresh(http, client_id, client_secret, refresh_token).await?;
    if let Err(error) = token_store::store(&refreshed) {
        tracing::warn!(%error, "refreshed token could not be persisted");
    }
    Ok(Freshness::Refreshed(refreshed))
}

/// Load the stored token and bring it up to date.
///
/// Returns `Ok(None)` when nothing is stored, or when the stored grant is
/// dead (the caller falls through to the browser flow).
///
/// # Errors
///
/// Returns `AuthError` for transport failures while refreshing.
pub(crate) async fn check_stored_token(
    http: &reqwest::Client,
    client_id: &str,
    client_secret: &str,
) -> Result<Option<OAuthToken>, AuthError> {
    let Some(token) = token_store::load() else {
        return Ok(None);
    };

    match ensure_fresh(http, client_id, client_secret, token).await {
        Ok(fresh) => Ok(Some(fresh.into_token())),
        Err(AuthError::TokenExpired) => {
            tracing::warn!("stored Google session expired; a browser sign-in is needed");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}
