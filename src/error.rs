/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Error type shared by every fallible operation in the crate

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Payload could not be encoded or decoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local storage I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The server rejected the credentials and no refresh was possible
    #[error("unauthorized")]
    Unauthorized,

    /// The session could not be renewed and has been cleared
    #[error("session expired")]
    SessionExpired,

    /// A queued request was rejected because the shared token refresh failed
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),

    /// Resource not found (HTTP 404)
    #[error("not found")]
    NotFound,

    /// Too many requests (HTTP 429)
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// Any other non-success response, body kept verbatim
    #[error("http error {status}: {body}")]
    Http {
        /// Response status
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// A precondition on the caller's input or local state failed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The authenticated identity changed underneath the session
    #[error("security violation: {0}")]
    SecurityViolation(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the HTTP status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::RateLimitExceeded => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Extracts the `detail` message of a DRF error body
    ///
    /// Returns `None` when the error carries no body or the body is not a JSON
    /// object with a string `detail` field.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::Http { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string)),
            _ => None,
        }
    }
}
