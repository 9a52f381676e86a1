pub mod examples;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::profile::handlers;
use crate::query::handlers::handle_query;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/examples", get(examples::examples_handler))
        // Chat + structured query
        .route("/chat", post(handle_chat))
        .route("/query", post(handle_query))
        // Profile CRUD
        .route("/profile", get(handlers::handle_get_profile))
        .route("/profile/update", put(handlers::handle_update_profile))
        .route("/profile/:category", get(handlers::handle_get_category))
        .route("/skills/add", post(handlers::handle_add_skill))
        .route("/search/:keyword", get(handlers::handle_search))
        // Analytics
        .route(
            "/analytics/skills-count",
            get(handlers::handle_skills_count),
        )
        .route(
            "/analytics/experience-timeline",
            get(handlers::handle_experience_timeline),
        )
        .with_state(state)
}
