//! Synset endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{authorize, error_response, require, WordQueryParams};
use crate::mock_server::state::MockState;
use crate::Synset;

/// Query parameters of `getSynset`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynsetQuery {
    pub id: Option<String>,
    pub filter_langs: Option<String>,
    pub key: Option<String>,
}

/// GET /getSynsetIds
pub async fn get_synset_ids(
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

    let ids = state.find_synset_ids(word, query.filter());
    (StatusCode::OK, Json(ids)).into_response()
}

/// GET /getSynset
pub async fn get_synset(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<SynsetQuery>,
) -> Response {
    let state = state.read().await;

    if let Err(rejection) = authorize(&state, query.key.as_deref()) {
        return rejection;
    }
    let id = match require(query.id.as_deref(), "id") {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };

    match state.get_synset(id) {
        Some(synset) => {
            let synset = match query.filter_langs.as_deref().filter(|l| !l.is_empty()) {
                Some(langs) => restrict_languages(synset, langs),
                None => synset.clone(),
            };
            (StatusCode::OK, Json(synset)).into_response()
        }
        None => error_response(StatusCode::NOT_FOUND, format!("Synset not found: {id}")),
    }
}

/// Keep only the senses, glosses, and examples in `langs` (comma-separated).
fn restrict_languages(synset: &Synset, langs: &str) -> Synset {
    let langs: Vec<String> = langs
        .split(',')
        .map(|l| l.trim().to_ascii_uppercase())
        .filter(|l| !l.is_empty())
        .collect();
    let keep = |language: &Option<String>| {
        language
            .as_deref()
            .is_some_and(|l| langs.iter().any(|wanted| wanted.eq_ignore_ascii_case(l)))
    };

    let mut restricted = synset.clone();
    restricted.senses.retain(|s| keep(&s.language));
    restricted.glosses.retain(|g| keep(&g.language));
    restricted.examples.retain(|e| keep(&e.language));
    restricted.filter_langs = langs.clone();
    restricted
}
