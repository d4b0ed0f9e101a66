//! Edge endpoint handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{authorize, error_response, require};
use crate::mock_server::state::MockState;

/// Query parameters of `getEdges`.
#[derive(Debug, Default, Deserialize)]
pub struct EdgesQuery {
    pub id: Option<String>,
    pub key: Option<String>,
}

/// GET /getEdges
pub async fn get_edges(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<EdgesQuery>,
) -> Response {
    let state = state.read().await;

    if let Err(rejection) = authorize(&state, query.key.as_deref()) {
        return rejection;
    }
    let id = match require(query.id.as_deref(), "id") {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };

    if state.get_synset(id).is_none() {
        return error_response(StatusCode::NOT_FOUND, format!("Synset not found: {id}"));
    }

    (StatusCode::OK, Json(state.get_edges(id))).into_response()
}
