//! Error types for BabelNet API operations.

use thiserror::Error;

/// Errors that can occur during BabelNet API operations.
#[derive(Debug, Error)]
pub enum BabelNetError {
    /// Configuration is missing or incomplete.
    #[error("BabelNet configuration required: {0}")]
    ConfigMissing(String),

    /// A required request parameter resolved to nothing.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// The server answered with a status other than 200.
    #[error("BabelNet API error ({status_code}): {message}")]
    ApiError { message: String, status_code: u16 },

    /// HTTP transport error (DNS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The response was valid JSON of the wrong shape.
    #[error("Unexpected response from {endpoint}: expected {expected}")]
    UnexpectedResponse {
        endpoint: &'static str,
        expected: &'static str,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl BabelNetError {
    /// HTTP status code of an API error, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Result type alias for BabelNet operations.
pub type Result<T> = core::result::Result<T, BabelNetError>;
