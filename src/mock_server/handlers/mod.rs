//! HTTP request handlers for the mock server.

pub mod edges;
pub mod senses;
pub mod synsets;
pub mod version;

pub use edges::*;
pub use senses::*;
pub use synsets::*;
pub use version::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::mock_server::state::{MockState, WordFilter};

/// Message BabelNet returns for a rejected key.
pub const INVALID_KEY_MESSAGE: &str =
    "Your key is not valid or the daily requests limit has been reached.";

/// Query parameters of the word lookups.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordQueryParams {
    pub word: Option<String>,
    pub lang: Option<String>,
    #[allow(dead_code)] // Accepted by BabelNet; senses are returned in every language
    pub filter_langs: Option<String>,
    pub pos: Option<String>,
    pub source: Option<String>,
    #[allow(dead_code)] // Accepted by BabelNet; lemmas are always normalized here
    pub normalizer: Option<String>,
    pub key: Option<String>,
}

impl WordQueryParams {
    pub(crate) fn filter(&self) -> WordFilter<'_> {
        WordFilter {
            lang: self.lang.as_deref(),
            pos: self.pos.as_deref(),
            source: self.source.as_deref(),
        }
    }
}

/// A JSON error body with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "message": message.into() })),
    )
        .into_response()
}

/// Reject requests without an accepted key.
pub(crate) fn authorize(state: &MockState, key: Option<&str>) -> Result<(), Response> {
    if state.accepts_key(key) {
        Ok(())
    } else {
        Err(error_response(StatusCode::FORBIDDEN, INVALID_KEY_MESSAGE))
    }
}

/// Extract a mandatory parameter.
pub(crate) fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, Response> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Missing mandatory parameter: {name}"),
        )
    })
}
