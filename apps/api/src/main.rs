mod analysis;
mod config;
mod db;
mod errors;
mod explanation;
mod extraction;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{LlmClient, NoopTextGeneration, TextGenerationService};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skillfit API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;
    let text_gen = build_text_generation(&config)?;

    let state = AppState {
        db,
        text_gen,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the text-generation backend: the LLM client when a key is configured,
/// otherwise the no-op backend so every AI path takes its fallback.
fn build_text_generation(config: &Config) -> Result<Arc<dyn TextGenerationService>> {
    match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(
                key.clone(),
                config.llm_model.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            )?;
            info!("LLM client initialized (model: {})", client.model());
            Ok(Arc::new(client))
        }
        None => {
            warn!("No ANTHROPIC_API_KEY set; AI refinement and explanations use fallbacks");
            Ok(Arc::new(NoopTextGeneration))
        }
    }
}
