//! Axum route handler for structured-only queries.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::query::matcher::{QueryMatcher, QueryResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    // Accepted for client compatibility; routing is decided by the matcher alone.
    #[allow(dead_code)]
    #[serde(default)]
    pub category: Option<String>,
}

/// Runs the matcher under a read guard that is released before returning.
pub async fn answer_from_profile(state: &AppState, query: &str) -> QueryResult {
    let store = state.profile.read().await;
    QueryMatcher::new(&store).process(query)
}

/// POST /query
pub async fn handle_query(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResult>, AppError> {
    let Json(request) = payload?;
    Ok(Json(answer_from_profile(&state, &request.query).await))
}
