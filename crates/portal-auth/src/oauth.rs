//! Google OAuth 2.0 endpoints: authorization URL, code exchange, refresh,
//! revocation, and the signed-in user's profile.

use base64::Engine as _;
use chrono::Utc;
use portal_core::Profile;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::AuthError;
use crate::token::{OAuthToken, TokenResponse};

pub const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
pub const REVOKE_ENDPOINT: &str = "https://oauth2.googleapis.com/revoke";
pub const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// A PKCE verifier and its S256 challenge.
#[derive(Debug, Clone)]
pub struct Pkce {
    pub verifier: String,
    pub challenge: String,
}

impl Pkce {
    /// Generate a fresh 32-byte verifier.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BrowserFlowFailed` if the OS RNG is unavailable.
    pub fn generate() -> Result<Self, AuthError> {
        let mut bytes = [0u8; 32];
        getrandom::fill(&mut bytes)
            .map_err(|e| {
                AuthError::BrowserFlowFailed(format!("failed to generate PKCE verifier: {e}"))
            })?;
        Ok(Self::from_verifier(
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes),
        ))
    }

    #[must_use]
    pub fn from_verifier(verifier: String) -> Self {
        let digest = Sha256::digest(verifier.as_bytes());
        let challenge = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);
        Self { verifier, challenge }
    }
}

/// Build an `application/x-www-form-urlencoded` body.
pub(crate) fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// URL the browser is sent to for consent.
#[must_use]
pub fn authorization_url(
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
    state: &str,
    code_challenge: &str,
) -> String {
    let query = form_body(&[
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
        ("scope", scope),
        ("state", state),
        ("code_challenge", code_challenge),
        ("code_challenge_method", "S256"),
        ("access_type", "offline"),
        ("prompt", "consent"),
    ]);
    format!("{AUTH_ENDPOINT}?{query}")
}

#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

fn describe_error(status: u16, body: &str) -> String {
    serde_json::from_str::<OAuthErrorBody>(body).map_or_else(
        |_| format!("HTTP {status}: {body}"),
        |e| match e.error_description {
            Some(desc) => format!("{}: {desc}", e.error),
            None => e.error,
        },
    )
}

async fn post_token_request(
    http: &reqwest::Client,
    body: String,
) -> Result<Result<TokenResponse, (u16, String)>, AuthError> {
    let resp = http
        .post(TOKEN_ENDPOINT)
        .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    if !status.is_success() {
        return Ok(Err((status.as_u16(), text)));
    }
    serde_json::from_str(&text)
        .map(Ok)
        .map_err(|e| AuthError::TokenExchange(format!("unexpected token response: {e}")))
}

/// Exchange an authorization code for tokens.
///
/// # Errors
///
/// Returns `AuthError::TokenExchange` on transport failure or a rejected code.
pub async fn exchange_code(
    http: &reqwest::Client,
    client_id: &str,
    client_secret: &str,
    code: &str,
    redirect_uri: &str,
    code_verifier: &str,
) -> Result<OAuthToken, AuthError> {
    let body = form_body(&[
        ("grant_type", "authorization_code"),
        ("code", code),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("redirect_uri", redirect_uri),
        ("code_verifier", code_verifier),
    ]);
    match post_token_request(http, body).await? {
        Ok(response) => Ok(OAuthToken::from_response(response, Utc::now(), None)),
        Err((status, text)) => Err(AuthError::TokenExchange(describe_error(status, &text))),
    }
}

/// Trade a refresh token for a new access token.
///
/// # Errors
///
/// Returns `AuthError::TokenExpired` when Google rejects the grant
/// (revoked or expired refresh token), `AuthError::TokenExchange` otherwise.
pub async fn refresh(
    http: &reqwest::Client,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<OAuthToken, AuthError> {
    let body = form_body(&[
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", client_id),
        ("client_secret", client_secret),
    ]);
    match post_token_request(http, body).await? {
        Ok(response) => Ok(OAuthToken::from_response(
            response,
            Utc::now(),
            Some(refresh_token.to_string()),
        )),
        Err((400 | 401, text)) if text.contains("invalid_grant") => {
            tracing::debug!(body = %text, "refresh token rejected");
            Err(AuthError::TokenExpired)
        }
        Err((status, text)) => Err(AuthError::TokenExchange(describe_error(status, &text))),
    }
}

/// Revoke a token so the grant no longer works.
///
/// # Errors
///
/// Returns `AuthError::Revoke` on transport failure or a non-success status.
/// A token Google no longer recognises (`invalid_token`) counts as revoked.
pub async fn revoke(http: &reqwest::Client, token: &str) -> Result<(), AuthError> {
    let resp = http
        .post(REVOKE_ENDPOINT)
        .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(form_body(&[("token", token)]))
        .send()
        .await
        .map_err(|e| AuthError::Revoke(e.to_string()))?;

    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let text = resp.text().await.unwrap_or_default();
    if text.contains("invalid_token") {
        tracing::debug!("token already invalid at revocation");
        return Ok(());
    }
    Err(AuthError::Revoke(describe_error(status.as_u16(), &text)))
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

impl From<UserInfo> for Profile {
    fn from(info: UserInfo) -> Self {
        let email = info.email.unwrap_or_default();
        let display_name = info.name.filter(|n| !n.is_empty()).unwrap_or_else(|| email.clone());
        Self::new(display_name, email, info.picture.unwrap_or_default())
    }
}

/// Fetch the signed-in user's profile.
///
/// # Errors
///
/// Returns `AuthError::Profile` on transport failure, a non-success status,
/// or an unexpected body.
pub async fn fetch_profile(
    http: &reqwest::Client,
    access_token: &str,
) -> Result<Profile, AuthError> {
    let resp = http
        .get(USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| AuthError::Profile(e.to_string()))?;
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(AuthError::TokenExpired);
    }
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(AuthError::Profile(describe_error(status.as_u16(), &text)));
    }
    let info: UserInfo = resp
        .json()
        .await
        .map_err(|e| AuthError::Profile(format!("unexpected userinfo body: {e}")))?;
    Ok(info.into())
}
