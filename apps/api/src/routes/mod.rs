pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // JD skill extraction
        .route(
            "/api/v1/jds/:id/skills/extract",
            post(extraction::handle_extract_skills),
        )
        .route("/api/v1/jds/:id/skills", get(extraction::handle_get_jd_skills))
        // Analysis
        .route("/api/v1/analysis", post(analysis::handle_start_analysis))
        .route("/api/v1/analysis/:id", get(analysis::handle_get_analysis))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::NoopTextGeneration;

    fn test_state() -> AppState {
        let config = Config::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/skillfit_test".to_string())
        })
        .unwrap();
        let db = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        AppState {
            db,
            text_gen: Arc::new(NoopTextGeneration),
            config,
        }
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["text_generation"], "noop");
        assert_eq!(json["ai_configured"], false);
    }

    #[tokio::test]
    async fn test_malformed_analysis_id_rejected() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/analysis/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nil_ids_fail_validation() {
        let app = build_router(test_state());
        let body = r#"{"resume_id":"00000000-0000-0000-0000-000000000000","jd_id":"00000000-0000-0000-0000-000000000000"}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analysis")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
