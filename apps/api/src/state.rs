use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::TextGenerationService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Text-generation capability. `NoopTextGeneration` when no API key is configured.
    pub text_gen: Arc<dyn TextGenerationService>,
    pub config: Config,
}
