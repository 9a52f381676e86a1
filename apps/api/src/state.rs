use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::llm_client::ChatModel;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Writers (`update`, `add_skill`) take the write lock, so the duplicate
    /// check and append in `add_skill` cannot interleave.
    /// Never hold a guard across an LLM call.
    pub profile: Arc<RwLock<ProfileStore>>,
    /// Pluggable chat model. Default: `LlmClient`.
    pub llm: Arc<dyn ChatModel>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(profile: ProfileStore, llm: Arc<dyn ChatModel>) -> Self {
        Self {
            profile: Arc::new(RwLock::new(profile)),
            llm,
            started_at: Utc::now(),
        }
    }
}
