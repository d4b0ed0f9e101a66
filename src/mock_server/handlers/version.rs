//! Version endpoint handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::authorize;
use crate::mock_server::state::MockState;

/// Query parameters of `getVersion`.
#[derive(Debug, Default, Deserialize)]
pub struct VersionQuery {
    pub key: Option<String>,
}

/// GET /getVersion
pub async fn get_version(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<VersionQuery>,
) -> Response {
    let state = state.read().await;

    if let Err(rejection) = authorize(&state, query.key.as_deref()) {
        return rejection;
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({ "version": state.version })),
    )
        .into_response()
}
