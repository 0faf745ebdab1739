//! Axum route handlers for JD skill extraction.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_and_store, store, AiRefinement};
use crate::models::skill::{Importance, SkillCatalog};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JdSkillView {
    pub skill_id: i64,
    pub skill_name: String,
    pub importance: Importance,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub jd_id: Uuid,
    pub skills: Vec<JdSkillView>,
    pub ai_refinement: AiRefinement,
}

#[derive(Debug, Serialize)]
pub struct JdSkillsResponse {
    pub jd_id: Uuid,
    pub skills: Vec<JdSkillView>,
}

fn to_views(catalog: &SkillCatalog, skills: impl IntoIterator<Item = (i64, Importance)>) -> Vec<JdSkillView> {
    skills
        .into_iter()
        .map(|(skill_id, importance)| JdSkillView {
            skill_id,
            skill_name: catalog.name_or_placeholder(skill_id).to_string(),
            importance,
        })
        .collect()
}

/// POST /api/v1/jds/:id/skills/extract
///
/// Re-runs extraction for one JD and replaces its stored requirements.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Path(jd_id): Path<Uuid>,
) -> Result<Json<ExtractResponse>, AppError> {
    let result = extract_and_store(&state.db, state.text_gen.as_ref(), jd_id).await?;
    let catalog = store::load_catalog(&state.db).await?;

    Ok(Json(ExtractResponse {
        jd_id,
        skills: to_views(&catalog, result.skills),
        ai_refinement: result.refinement,
    }))
}

/// GET /api/v1/jds/:id/skills
pub async fn handle_get_jd_skills(
    State(state): State<AppState>,
    Path(jd_id): Path<Uuid>,
) -> Result<Json<JdSkillsResponse>, AppError> {
    let rows = store::load_jd_skills(&state.db, jd_id).await?;
    let catalog = store::load_catalog(&state.db).await?;

    let skills = rows
        .into_iter()
        .map(|row| {
            row.importance
                .parse::<Importance>()
                .map(|importance| (row.skill_id, importance))
                .map_err(|e| AppError::Internal(anyhow::anyhow!("jd_skills row: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(JdSkillsResponse {
        jd_id,
        skills: to_views(&catalog, skills),
    }))
}
