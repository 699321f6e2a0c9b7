/*
[INPUT]:  Error sources (configuration, HTTP transport, response decoding, decimals)
[OUTPUT]: Structured error types carrying the remote status and body
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the CoinSpot adapter
#[derive(Error, Debug)]
pub enum CoinspotError {
    /// Missing or invalid credentials / URL at construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP-level failure (4xx/5xx) or transport failure (status is None)
    #[error("Request failed{}: {body}", status_suffix(.status))]
    Request { status: Option<u16>, body: String },

    /// A required request parameter was empty
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Remote answered, but not with reason phrase "OK"
    #[error("Non-OK response: {status} {reason}")]
    NonOkResponse { status: u16, reason: String },

    /// Response body could not be decoded as JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Coin amount violates the 8 decimal place limit
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// AUD rate violates the 6 decimal place limit
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Underlying HTTP client error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl CoinspotError {
    /// Check if error was raised while validating configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, CoinspotError::Config(_) | CoinspotError::UrlParse(_))
    }

    /// HTTP status attached to the error, if the remote answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            CoinspotError::Request { status, .. } => *status,
            CoinspotError::NonOkResponse { status, .. } => Some(*status),
            CoinspotError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create a request error from a failed status code and response body
    pub fn request_error(status: StatusCode, body: impl Into<String>) -> Self {
        CoinspotError::Request {
            status: Some(status.as_u16()),
            body: body.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

/// Result type alias for CoinSpot operations
pub type Result<T> = std::result::Result<T, CoinspotError>;
