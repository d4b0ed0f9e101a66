//! Sense endpoint handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{authorize, require, WordQueryParams};
use crate::mock_server::state::MockState;

/// GET /getSenses
pub async fn get_senses(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<WordQueryParams>,
) -> Response {
    let state = state.read().await;

    if let Err(rejection) = authorize(&state, query.key.as_deref()) {
        return rejection;
    }
    let word = match require(query.word.as_deref(), "word") {
        Ok(word) => word,
        Err(rejection) => return rejection,
    };

    let senses = state.find_senses(word, query.filter());
    (StatusCode::OK, Json(senses)).into_response()
}
