//! Axum route handlers for the profile CRUD, keyword search and analytics APIs.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::keyword_prompt;
use crate::profile::analytics::{experience_timeline, skills_count, SkillsCount, TimelineEntry};
use crate::profile::store::DEFAULT_SKILL_CATEGORY;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub category: String,
    pub field: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    pub updated: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillParams {
    pub skill: String,
    #[serde(default = "default_skill_category")]
    pub category: String,
}

fn default_skill_category() -> String {
    DEFAULT_SKILL_CATEGORY.to_string()
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub keyword: String,
    pub result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub timeline: Vec<TimelineEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Value> {
    let store = state.profile.read().await;
    Json(store.data().clone())
}

/// GET /profile/:category
pub async fn handle_get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Value>, AppError> {
    let store = state.profile.read().await;
    store
        .category(&category)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Category '{category}' not found")))
}

/// PUT /profile/update
///
/// Replaces one direct field of a top-level category with a string.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<UpdateResponse>, AppError> {
    let Json(request) = payload?;
    let updated = state
        .profile
        .write()
        .await
        .update(&request.category, &request.field, &request.value);

    if !updated {
        return Err(AppError::Validation("Invalid category or field".to_string()));
    }

    let mut fields = Map::new();
    fields.insert(request.field, Value::String(request.value));
    Ok(Json(UpdateResponse {
        message: "Profile updated successfully".to_string(),
        updated: fields,
    }))
}

/// POST /skills/add?skill=..&category=..
///
/// The skill is stored exactly as sent; only a blank value is refused.
/// Rejections (duplicate or non-list category) are reported in the message, not as an error.
pub async fn handle_add_skill(
    State(state): State<AppState>,
    params: Result<Query<AddSkillParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(AddSkillParams { skill, category }) = params?;
    if skill.trim().is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }

    let added = state.profile.write().await.add_skill(&skill, &category);

    let message = if added {
        format!("Skill '{skill}' added successfully")
    } else {
        format!("Skill '{skill}' already exists or invalid category")
    };
    Ok(Json(MessageResponse { message }))
}

/// GET /search/:keyword
///
/// Keyword-map hit first; otherwise asks the chat model about the keyword.
pub async fn handle_search(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<SearchResponse>, AppError> {
    let found = state.profile.read().await.search_by_keyword(&keyword).cloned();

    if let Some(result) = found {
        return Ok(Json(SearchResponse {
            keyword,
            result,
            source: None,
        }));
    }

    match state.llm.reply(&keyword_prompt(&keyword)).await {
        Ok(text) => Ok(Json(SearchResponse {
            keyword,
            result: Value::String(text),
            source: Some("deepseek_llm".to_string()),
        })),
        Err(e) => {
            warn!("Keyword search fell through to LLM and failed: {e}");
            Err(AppError::NotFound(format!(
                "No information found for '{keyword}'"
            )))
        }
    }
}

/// GET /analytics/skills-count
pub async fn handle_skills_count(State(state): State<AppState>) -> Json<SkillsCount> {
    let store = state.profile.read().await;
    Json(skills_count(&store))
}

/// GET /analytics/experience-timeline
pub async fn handle_experience_timeline(State(state): State<AppState>) -> Json<TimelineResponse> {
    let store = state.profile.read().await;
    Json(TimelineResponse {
        timeline: experience_timeline(&store),
    })
}
