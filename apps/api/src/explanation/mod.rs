//! Explanation generator: turns a FinalAnalysis into human-readable prose.
//!
//! The model output is untrusted: it must deserialize into `Explanation` or the
//! fixed failure template is returned. Nothing here can fail the analysis.

pub mod prompts;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::explanation::prompts::{EXPLANATION_PROMPT_TEMPLATE, EXPLANATION_SYSTEM};
use crate::llm_client::{GenerationOutcome, TextGenerationService};
use crate::matching::types::FinalAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub summary: String,
    pub strengths_explained: Vec<String>,
    pub gaps_explained: Vec<String>,
    pub experience_commentary: String,
    pub actionable_recommendations: Vec<String>,
}

impl Explanation {
    /// Returned when no text-generation backend is configured.
    pub fn unavailable() -> Self {
        Explanation {
            summary: "Analysis complete (AI Explanation Unavailable). Please review the detailed checklist below.".to_string(),
            strengths_explained: vec!["AI API Key missing - see raw analysis.".to_string()],
            gaps_explained: vec![],
            experience_commentary: "Check detailed analysis.".to_string(),
            actionable_recommendations: vec![],
        }
    }

    /// Returned when the call or the schema check fails.
    pub fn generation_failed() -> Self {
        Explanation {
            summary: "Analysis complete. AI generation failed.".to_string(),
            strengths_explained: vec![],
            gaps_explained: vec![],
            experience_commentary: String::new(),
            actionable_recommendations: vec![],
        }
    }
}

pub fn build_prompt(analysis: &FinalAnalysis) -> Result<String, serde_json::Error> {
    let analysis_json = serde_json::to_string_pretty(analysis)?;
    Ok(EXPLANATION_PROMPT_TEMPLATE.replace("{analysis_json}", &analysis_json))
}

fn validate(value: Value) -> Result<Explanation, String> {
    serde_json::from_value(value).map_err(|e| format!("explanation failed validation: {e}"))
}

pub async fn generate_explanation(
    text_gen: &dyn TextGenerationService,
    analysis: &FinalAnalysis,
) -> Explanation {
    let prompt = match build_prompt(analysis) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!("Could not serialize analysis for explanation: {e}");
            return Explanation::generation_failed();
        }
    };

    match text_gen
        .complete_json(EXPLANATION_SYSTEM, &prompt)
        .await
        .and_then(validate)
    {
        GenerationOutcome::Success(explanation) => explanation,
        GenerationOutcome::Unavailable => Explanation::unavailable(),
        GenerationOutcome::Failed(reason) => {
            warn!("Explanation generation failed: {reason}");
            Explanation::generation_failed()
        }
    }
}
