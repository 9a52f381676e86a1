mod chat;
mod config;
mod errors;
mod llm_client;
mod profile;
mod query;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::prompts::{persona_system_prompt, BIOGRAPHY, PERSONA_NAME};
use crate::llm_client::{ChatModel, LlmClient};
use crate::profile::store::ProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Profile dataset: file override or the built-in seed
    let profile = match &config.profile_path {
        Some(path) => ProfileStore::from_file(path)
            .with_context(|| format!("Failed to load profile from {}", path.display()))?,
        None => {
            info!("Using built-in profile dataset");
            ProfileStore::seeded()
        }
    };

    // Initialize LLM client
    let llm = LlmClient::new(
        config.llm_api_url.clone(),
        config.llm_api_key.clone(),
        persona_system_prompt(PERSONA_NAME, BIOGRAPHY),
    )?;
    if llm.is_configured() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("LLM_API_KEY not set; chat will answer from structured data only");
    }

    let state = AppState::new(profile, Arc::new(llm));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
