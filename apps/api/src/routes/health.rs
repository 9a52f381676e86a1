use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and whether the chat model has credentials.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let llm_integration = if state.llm.is_configured() {
        "active"
    } else {
        "unconfigured"
    };

    Json(json!({
        "status": "healthy",
        "api": "Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "structured_data": "active",
        "llm_integration": llm_integration,
        "started_at": state.started_at,
    }))
}
