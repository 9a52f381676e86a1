//! Hybrid chat: structured answers first, the chat model for everything else.
//!
//! Flow for one message:
//! 1. `use_llm_only` skips the matcher and asks the model directly.
//! 2. A matcher answer with confidence above [`CONFIDENCE_THRESHOLD`] is returned as is.
//! 3. Otherwise the model is asked.
//! 4. If the model fails with an upstream status, that status is returned to the
//!    client. Any other failure answers from the matcher (or with [`APOLOGY`]
//!    when the matcher had nothing).

pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::query::handlers::answer_from_profile;
use crate::query::matcher::QueryResult;
use crate::state::AppState;

/// Structured answers must score strictly above this to skip the model.
pub const CONFIDENCE_THRESHOLD: f32 = 0.7;

pub const DEFAULT_SESSION: &str = "default";

pub const APOLOGY: &str = "I'm having trouble processing your request. \
    Please try asking about my skills, experience, or projects.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub use_llm_only: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    /// Which rule or collaborator produced `response`.
    pub source: String,
}

pub async fn respond(state: &AppState, request: ChatRequest) -> Result<ChatResponse, AppError> {
    let session_id = request
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());

    let structured = if request.use_llm_only {
        None
    } else {
        let result = answer_from_profile(state, &request.message).await;
        if result.confidence > CONFIDENCE_THRESHOLD {
            return Ok(ChatResponse {
                response: result.answer,
                session_id,
                source: result.source,
            });
        }
        Some(result)
    };

    let llm_source = if request.use_llm_only {
        "deepseek_llm"
    } else {
        "deepseek_llm_fallback"
    };

    match state.llm.reply(&request.message).await {
        Ok(text) => {
            info!("Chat answered by LLM ({llm_source})");
            Ok(ChatResponse {
                response: text,
                session_id,
                source: llm_source.to_string(),
            })
        }
        Err(LlmError::Api { status, message }) => Err(AppError::Upstream { status, message }),
        Err(e) => {
            warn!("Chat LLM call failed, answering from profile: {e}");
            let fallback = match structured {
                Some(result) => result,
                None => answer_from_profile(state, &request.message).await,
            };
            Ok(ChatResponse {
                response: fallback_text(fallback),
                session_id,
                source: "error_fallback".to_string(),
            })
        }
    }
}

fn fallback_text(result: QueryResult) -> String {
    if result.confidence > 0.0 {
        result.answer
    } else {
        APOLOGY.to_string()
    }
}
