//! Shared HTTP response helpers for the Workspace clients.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`ServiceError::Api`]) so the per-service modules
//! stay focused on request construction and response mapping.

use crate::error::ServiceError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ServiceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`ServiceError::Api`] with status code and
///   the Google error message when the body carries one.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ServiceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ServiceError::Api {
            status,
            message: google_error_message(&body).unwrap_or(body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Pull `error.message` out of a Google JSON error body.
fn google_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"]["message"].as_str().map(str::to_string)
}
