//! Remote service error types.

use thiserror::Error;

use crate::mime::MailError;

/// Errors that can occur when calling a Google Workspace API.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The call did not complete within the configured bound.
    #[error("timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    /// The outgoing message could not be encoded.
    #[error("mail encoding error: {0}")]
    Mail(#[from] MailError),

    /// Failed to build a request or parse a response.
    #[error("parse error: {0}")]
    Parse(String),
}
