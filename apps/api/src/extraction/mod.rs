//! JD Skill Extractor: derives skill id → importance for one job description.
//!
//! Flow: heuristic section passes → optional AI refinement → merge (AI wins) →
//! full replacement of the JD's persisted requirement rows.

pub mod handlers;
pub mod heuristics;
pub mod prompts;
pub mod refine;
pub mod store;

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{GenerationOutcome, TextGenerationService};
use crate::models::jd::JdSections;
use crate::models::skill::{Importance, SkillCatalog};

/// What happened to the AI refinement step on one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AiRefinement {
    Applied { skills_reported: usize },
    Unavailable,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub skills: BTreeMap<i64, Importance>,
    pub refinement: AiRefinement,
}

/// Classifies every catalog skill mentioned in the JD. Never fails: AI problems
/// degrade to the heuristic-only map.
pub async fn extract_skill_importance(
    sections: &JdSections,
    raw_text: &str,
    catalog: &SkillCatalog,
    text_gen: &dyn TextGenerationService,
) -> ExtractionResult {
    let heuristic = heuristics::classify_sections(sections, catalog);

    match refine::query_ai_importance(text_gen, raw_text, catalog).await {
        GenerationOutcome::Success(ai) => ExtractionResult {
            skills: refine::merge_importance(&heuristic, &ai),
            refinement: AiRefinement::Applied {
                skills_reported: ai.len(),
            },
        },
        GenerationOutcome::Unavailable => ExtractionResult {
            skills: heuristic,
            refinement: AiRefinement::Unavailable,
        },
        GenerationOutcome::Failed(reason) => {
            warn!("AI skill refinement skipped: {reason}");
            ExtractionResult {
                skills: heuristic,
                refinement: AiRefinement::Failed { reason },
            }
        }
    }
}

/// Loads the JD and catalog, extracts, and replaces the JD's requirement rows.
///
/// A JD without segmented sections yields an empty result and its existing rows
/// are left in place. Callers must serialize extractions for the same JD.
pub async fn extract_and_store(
    pool: &PgPool,
    text_gen: &dyn TextGenerationService,
    jd_id: Uuid,
) -> Result<ExtractionResult, AppError> {
    let jd = store::load_job_description(pool, jd_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job description {jd_id} not found")))?;

    let Some(sections) = jd.sections() else {
        warn!("Job description {jd_id} has no parsed sections; skipping skill extraction");
        return Ok(ExtractionResult {
            skills: BTreeMap::new(),
            refinement: AiRefinement::Unavailable,
        });
    };

    let catalog = store::load_catalog(pool).await?;
    let result = extract_skill_importance(&sections, &jd.raw_text, &catalog, text_gen).await;

    store::replace_jd_skills(pool, jd_id, &result.skills).await?;

    info!(
        "Extracted {} skills for JD {jd_id} from a catalog of {} (backend: {}, refinement: {:?})",
        result.skills.len(),
        catalog.len(),
        text_gen.backend(),
        result.refinement
    );

    Ok(result)
}
