use std::sync::Arc;

use crate::llm_client::LlmProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model client. Production wires up Gemini; tests inject a mock.
    pub llm: Arc<dyn LlmProvider>,
}
