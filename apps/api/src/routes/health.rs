use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and which text-generation backend is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillfit-api",
        "text_generation": state.text_gen.backend(),
        "ai_configured": state.config.anthropic_api_key.is_some()
    }))
}
