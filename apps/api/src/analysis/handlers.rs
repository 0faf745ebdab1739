//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::{runner, store};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_id: Uuid,
    pub jd_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub id: Uuid,
    pub status: String,
    pub score: f64,
    pub details: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisDetailResponse {
    pub analysis: AnalysisSummary,
    pub explanation: Option<Value>,
}

/// POST /api/v1/analysis
///
/// Records the request as `processing` and returns immediately; the scoring
/// runs in the background.
pub async fn handle_start_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    if request.resume_id.is_nil() || request.jd_id.is_nil() {
        return Err(AppError::Validation(
            "resume_id and jd_id must be set".to_string(),
        ));
    }

    let row = runner::start_analysis(
        &state.db,
        state.text_gen.clone(),
        request.resume_id,
        request.jd_id,
    )
    .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(AnalyzeResponse {
            analysis_id: row.id,
            status: row.status,
        }),
    ))
}

/// GET /api/v1/analysis/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Result<Json<AnalysisDetailResponse>, AppError> {
    let analysis = store::load_analysis(&state.db, analysis_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {analysis_id} not found")))?;

    let explanation = store::load_explanation(&state.db, analysis_id)
        .await?
        .map(|row| row.explanation_json);

    Ok(Json(AnalysisDetailResponse {
        analysis: AnalysisSummary {
            id: analysis.id,
            status: analysis.status,
            score: analysis.overall_match_score,
            details: analysis.result_json,
            created_at: analysis.created_at,
        },
        explanation,
    }))
}
