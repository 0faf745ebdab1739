//! Data contracts shared by the scoring chain and the persisted analysis payload.
//!
//! Field names on `FinalAnalysis` and its nested types are a wire contract consumed
//! by API clients and the explanation generator. Do not rename.

use serde::{Deserialize, Serialize};

pub use crate::models::skill::Importance;

/// Minimum resume confidence for a detected skill to count as matched.
pub const MATCH_THRESHOLD: f64 = 0.6;

/// Scoring weight per importance tier.
pub const CRITICAL_WEIGHT: f64 = 2.0;
pub const OPTIONAL_WEIGHT: f64 = 1.0;

impl Importance {
    pub fn weight(&self) -> f64 {
        match self {
            Importance::Critical => CRITICAL_WEIGHT,
            Importance::Optional => OPTIONAL_WEIGHT,
        }
    }
}

/// A skill detected on the resume. `confidence` is extraction certainty, not proficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSkillObservation {
    pub skill_id: i64,
    pub skill_name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdSkillRequirement {
    pub skill_id: i64,
    pub skill_name: String,
    pub importance: Importance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub resume_skills: Vec<ResumeSkillObservation>,
    pub jd_skills: Vec<JdSkillRequirement>,
    pub resume_experience_years: f64,
    pub jd_experience_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill_name: String,
    pub importance: Importance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill_name: String,
}

/// Disjoint partition of the JD requirement set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGapResult {
    pub matched: Vec<MatchedSkill>,
    pub missing_critical: Vec<MissingSkill>,
    pub missing_optional: Vec<MissingSkill>,
}

impl SkillGapResult {
    pub fn requirement_count(&self) -> usize {
        self.matched.len() + self.missing_critical.len() + self.missing_optional.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceStatus {
    Sufficient,
    Deficit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatchResult {
    pub required_years: f64,
    pub actual_years: f64,
    /// actual − required; negative is a deficit.
    pub gap: f64,
    pub status: ExperienceStatus,
    /// 1.0 or 0.85. Mapped to a sub-score by `final_score::experience_sub_score`.
    pub penalty_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// How much the pipeline trusts its own output, with the caveats that explain why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub level: ConfidenceLevel,
    pub limitations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub matched: Vec<String>,
    pub missing_critical: Vec<String>,
    pub missing_optional: Vec<String>,
}

impl From<&SkillGapResult> for SkillAnalysis {
    fn from(gap: &SkillGapResult) -> Self {
        SkillAnalysis {
            matched: gap.matched.iter().map(|m| m.skill_name.clone()).collect(),
            missing_critical: gap
                .missing_critical
                .iter()
                .map(|m| m.skill_name.clone())
                .collect(),
            missing_optional: gap
                .missing_optional
                .iter()
                .map(|m| m.skill_name.clone())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceAnalysis {
    pub required_years: f64,
    pub actual_years: f64,
    pub gap: f64,
}

impl From<&ExperienceMatchResult> for ExperienceAnalysis {
    fn from(exp: &ExperienceMatchResult) -> Self {
        ExperienceAnalysis {
            required_years: exp.required_years,
            actual_years: exp.actual_years,
            gap: exp.gap,
        }
    }
}

/// The persisted result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAnalysis {
    pub overall_match_score: f64,
    pub skill_analysis: SkillAnalysis,
    pub experience_analysis: ExperienceAnalysis,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    /// Filled in by a downstream collaborator; always empty here.
    pub recommendations: Vec<String>,
    pub confidence_level: ConfidenceLevel,
    pub limitations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_importance_weights() {
        assert_eq!(Importance::Critical.weight(), 2.0);
        assert_eq!(Importance::Optional.weight(), 1.0);
    }

    #[test]
    fn test_final_analysis_wire_shape() {
        let analysis = FinalAnalysis {
            overall_match_score: 0.57,
            skill_analysis: SkillAnalysis {
                matched: vec!["Python".to_string()],
                missing_critical: vec!["Docker".to_string()],
                missing_optional: vec![],
            },
            experience_analysis: ExperienceAnalysis {
                required_years: 5.0,
                actual_years: 3.0,
                gap: -2.0,
            },
            strengths: vec!["Matched Critical Skill: Python".to_string()],
            risks: vec![],
            recommendations: vec![],
            confidence_level: ConfidenceLevel::High,
            limitations: vec![],
        };

        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            value,
            json!({
                "overall_match_score": 0.57,
                "skill_analysis": {
                    "matched": ["Python"],
                    "missing_critical": ["Docker"],
                    "missing_optional": []
                },
                "experience_analysis": {
                    "required_years": 5.0,
                    "actual_years": 3.0,
                    "gap": -2.0
                },
                "strengths": ["Matched Critical Skill: Python"],
                "risks": [],
                "recommendations": [],
                "confidence_level": "high",
                "limitations": []
            })
        );
    }

    #[test]
    fn test_experience_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExperienceStatus::Deficit).unwrap(),
            r#""deficit""#
        );
    }
}
