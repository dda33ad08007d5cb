use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into route handlers via Axum extractors.
/// Everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Chat model behind `/chat`. Production: `LlmClient`.
    pub llm: Arc<dyn ChatCompletion>,
    pub config: Config,
}
