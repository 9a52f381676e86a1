use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::chat::{respond, ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    Ok(Json(respond(&state, request).await?))
}
