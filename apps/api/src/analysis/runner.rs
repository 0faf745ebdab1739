//! Drives one analysis request from `processing` to `completed` or `failed`.
//!
//! Flow: load resume + JD + catalog → build MatchInput → compose FinalAnalysis →
//!       explanation (soft-failing) → single-transaction write.
//!
//! No retries. Any error in the deterministic part marks the row `failed`.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::pipeline::{build_match_input, compose_analysis};
use crate::analysis::store;
use crate::explanation::generate_explanation;
use crate::extraction::store as jd_store;
use crate::llm_client::TextGenerationService;
use crate::matching::extract_years_of_experience;
use crate::models::analysis::{AnalysisRow, AnalysisStatus};

/// Creates the `processing` row and hands the work to a background task.
pub async fn start_analysis(
    pool: &PgPool,
    text_gen: Arc<dyn TextGenerationService>,
    resume_id: Uuid,
    jd_id: Uuid,
) -> Result<AnalysisRow, sqlx::Error> {
    let row = store::create_analysis(pool, resume_id, jd_id).await?;
    info!(
        "Created analysis {} for resume {resume_id} / JD {jd_id}",
        row.id
    );

    let pool = pool.clone();
    let analysis_id = row.id;
    tokio::spawn(async move {
        run_to_terminal(&pool, text_gen.as_ref(), analysis_id).await;
    });

    Ok(row)
}

/// Runs the analysis and records `failed` if anything in it errors.
pub async fn run_to_terminal(pool: &PgPool, text_gen: &dyn TextGenerationService, analysis_id: Uuid) {
    if let Err(e) = process_analysis(pool, text_gen, analysis_id).await {
        error!("Analysis {analysis_id} failed: {e:#}");
        if let Err(e) = store::mark_failed(pool, analysis_id).await {
            error!("Could not mark analysis {analysis_id} as failed: {e}");
        }
    }
}

pub async fn process_analysis(
    pool: &PgPool,
    text_gen: &dyn TextGenerationService,
    analysis_id: Uuid,
) -> Result<()> {
    let Some(analysis) = store::load_analysis(pool, analysis_id).await? else {
        warn!("Analysis {analysis_id} disappeared before processing");
        return Ok(());
    };
    if analysis.status != AnalysisStatus::Processing.as_str() {
        warn!("Analysis {analysis_id} is already {}; skipping", analysis.status);
        return Ok(());
    }

    let resume = store::load_resume(pool, analysis.resume_id)
        .await?
        .with_context(|| format!("resume {} not found", analysis.resume_id))?;
    let jd = jd_store::load_job_description(pool, analysis.jd_id)
        .await?
        .with_context(|| format!("job description {} not found", analysis.jd_id))?;

    let resume_skills = store::load_resume_skills(pool, resume.id).await?;
    let jd_skills = jd_store::load_jd_skills(pool, jd.id).await?;
    let catalog = jd_store::load_catalog(pool).await?;

    let actual_years = extract_years_of_experience(resume.experience_section()).unwrap_or(0.0);

    let input = build_match_input(
        &catalog,
        &resume_skills,
        &jd_skills,
        actual_years,
        jd.min_years_experience,
    )?;
    let result = compose_analysis(&input);
    let explanation = generate_explanation(text_gen, &result).await;

    let written = store::complete_analysis(pool, analysis_id, &result, &explanation)
        .await
        .context("writing analysis result")?;

    if written {
        info!(
            "Analysis {analysis_id} completed: score={}, confidence={:?}",
            result.overall_match_score, result.confidence_level
        );
    } else {
        warn!("Analysis {analysis_id} was already terminal; result discarded");
    }

    Ok(())
}
