use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::explanation::Explanation;
use crate::matching::types::FinalAnalysis;
use crate::models::analysis::{
    AnalysisExplanationRow, AnalysisRow, AnalysisStatus, ENGINE_VERSION,
};
use crate::models::resume::{ResumeRow, ResumeSkillRow};

/// Inserts a new analysis in `processing` status with an empty result payload.
pub async fn create_analysis(
    pool: &PgPool,
    resume_id: Uuid,
    jd_id: Uuid,
) -> Result<AnalysisRow, sqlx::Error> {
    sqlx::query_as::<_, AnalysisRow>(
        r#"
        INSERT INTO analysis_results
            (id, resume_id, jd_id, status, overall_match_score, result_json, engine_version)
        VALUES ($1, $2, $3, $4, 0.0, '{}'::jsonb, $5)
        RETURNING id, resume_id, jd_id, status, overall_match_score, result_json,
                  engine_version, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume_id)
    .bind(jd_id)
    .bind(AnalysisStatus::Processing.as_str())
    .bind(ENGINE_VERSION)
    .fetch_one(pool)
    .await
}

pub async fn load_analysis(
    pool: &PgPool,
    analysis_id: Uuid,
) -> Result<Option<AnalysisRow>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisRow>(
        r#"
        SELECT id, resume_id, jd_id, status, overall_match_score, result_json,
               engine_version, created_at
        FROM analysis_results WHERE id = $1
        "#,
    )
    .bind(analysis_id)
    .fetch_optional(pool)
    .await
}

pub async fn load_explanation(
    pool: &PgPool,
    analysis_id: Uuid,
) -> Result<Option<AnalysisExplanationRow>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisExplanationRow>(
        "SELECT analysis_id, explanation_json FROM analysis_explanations WHERE analysis_id = $1",
    )
    .bind(analysis_id)
    .fetch_optional(pool)
    .await
}

pub async fn load_resume(pool: &PgPool, resume_id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT id, parsed_json FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(pool)
        .await
}

pub async fn load_resume_skills(
    pool: &PgPool,
    resume_id: Uuid,
) -> Result<Vec<ResumeSkillRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeSkillRow>(
        "SELECT resume_id, skill_id, confidence_score FROM resume_skills WHERE resume_id = $1 ORDER BY skill_id",
    )
    .bind(resume_id)
    .fetch_all(pool)
    .await
}

/// Writes the result, the explanation and the `completed` status atomically.
/// Only a `processing` row is updated, so a terminal analysis is never rewritten.
pub async fn complete_analysis(
    pool: &PgPool,
    analysis_id: Uuid,
    analysis: &FinalAnalysis,
    explanation: &Explanation,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE analysis_results
        SET overall_match_score = $1, result_json = $2, status = $3
        WHERE id = $4 AND status = $5
        "#,
    )
    .bind(analysis.overall_match_score)
    .bind(Json(analysis))
    .bind(AnalysisStatus::Completed.as_str())
    .bind(analysis_id)
    .bind(AnalysisStatus::Processing.as_str())
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if updated == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query(
        "INSERT INTO analysis_explanations (analysis_id, explanation_json) VALUES ($1, $2)",
    )
    .bind(analysis_id)
    .bind(Json(explanation))
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}

/// Moves a `processing` analysis to `failed`. No result payload is written.
pub async fn mark_failed(pool: &PgPool, analysis_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE analysis_results SET status = $1 WHERE id = $2 AND status = $3")
        .bind(AnalysisStatus::Failed.as_str())
        .bind(analysis_id)
        .bind(AnalysisStatus::Processing.as_str())
        .execute(pool)
        .await?;
    Ok(())
}
