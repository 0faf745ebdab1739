//! Pure composition of the scoring chain into one `FinalAnalysis`.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::matching::types::{
    ExperienceAnalysis, FinalAnalysis, JdSkillRequirement, MatchInput, ResumeSkillObservation,
    SkillAnalysis,
};
use crate::matching::{
    assess_confidence, calculate_experience_match, calculate_final_score, calculate_risk_flags,
    calculate_skill_score, collect_strengths, evaluate_skill_gap,
};
use crate::models::jd::JdSkillRow;
use crate::models::resume::ResumeSkillRow;
use crate::models::skill::{Importance, SkillCatalog};

/// Runs gap → score, experience match, composite score and the classifier.
pub fn compose_analysis(input: &MatchInput) -> FinalAnalysis {
    let skill_gap = evaluate_skill_gap(input);
    let skill_score = calculate_skill_score(&skill_gap);
    let experience =
        calculate_experience_match(input.resume_experience_years, input.jd_experience_years);
    let overall_match_score = calculate_final_score(skill_score, experience.penalty_factor);
    let risks = calculate_risk_flags(&skill_gap, &experience);
    let confidence = assess_confidence(&skill_gap, &experience);

    debug!(
        "Composed analysis: skill_score={skill_score}, penalty_factor={}, overall={overall_match_score}",
        experience.penalty_factor
    );

    FinalAnalysis {
        overall_match_score,
        skill_analysis: SkillAnalysis::from(&skill_gap),
        experience_analysis: ExperienceAnalysis::from(&experience),
        strengths: collect_strengths(&skill_gap),
        risks,
        recommendations: vec![],
        confidence_level: confidence.level,
        limitations: confidence.limitations,
    }
}

/// Joins stored rows with catalog names. Ids missing from the catalog read as "Unknown".
/// An unparseable stored importance is an error: rows are only ever written as
/// "critical" or "optional".
pub fn build_match_input(
    catalog: &SkillCatalog,
    resume_skills: &[ResumeSkillRow],
    jd_skills: &[JdSkillRow],
    resume_experience_years: f64,
    jd_experience_years: f64,
) -> Result<MatchInput> {
    let names: HashMap<i64, &str> = resume_skills
        .iter()
        .map(|r| r.skill_id)
        .chain(jd_skills.iter().map(|j| j.skill_id))
        .map(|id| (id, catalog.name_or_placeholder(id)))
        .collect();

    let resume_skills = resume_skills
        .iter()
        .map(|r| ResumeSkillObservation {
            skill_id: r.skill_id,
            skill_name: names[&r.skill_id].to_string(),
            confidence: r.confidence_score,
        })
        .collect();

    let jd_skills = jd_skills
        .iter()
        .map(|j| {
            let importance = j.importance.parse::<Importance>().map_err(|e| {
                anyhow!("jd_skills row ({}, {}): {e}", j.jd_id, j.skill_id)
            })?;
            Ok(JdSkillRequirement {
                skill_id: j.skill_id,
                skill_name: names[&j.skill_id].to_string(),
                importance,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MatchInput {
        resume_skills,
        jd_skills,
        resume_experience_years,
        jd_experience_years,
    })
}
