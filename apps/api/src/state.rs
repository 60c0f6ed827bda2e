use std::sync::Arc;

use crate::config::ApiKeySource;
use crate::llm_client::FeedbackGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. Default: `LlmClient` against Gemini.
    pub generator: Arc<dyn FeedbackGenerator>,
    /// Resolved on every request, never cached.
    pub api_key: ApiKeySource,
}
