//! Qualitative flags derived from the gap and experience results.

use crate::matching::types::{
    ConfidenceAssessment, ConfidenceLevel, ExperienceMatchResult, Importance, SkillGapResult,
};

pub const BASE_LIMITATION: &str = "Automated analysis based on keyword matching and heuristics.";
pub const NO_SKILLS_LIMITATION: &str = "No technical skills detected in JD or Resume.";
pub const EXPERIENCE_EXTRACTION_LIMITATION: &str =
    "Could not confidently extract experience years from resume.";
pub const NO_REQUIREMENTS_RISK: &str = "No skill requirements detected in job description";
pub const NO_MATCHES_RISK: &str = "None of the required skills were matched";

/// One "Matched Critical Skill: <name>" line per critical match, in JD order.
pub fn collect_strengths(gap: &SkillGapResult) -> Vec<String> {
    gap.matched
        .iter()
        .filter(|m| m.importance == Importance::Critical)
        .map(|m| format!("Matched Critical Skill: {}", m.skill_name))
        .collect()
}

pub fn calculate_risk_flags(gap: &SkillGapResult, experience: &ExperienceMatchResult) -> Vec<String> {
    let mut risks = Vec::new();

    if gap.requirement_count() == 0 {
        risks.push(NO_REQUIREMENTS_RISK.to_string());
    } else if gap.matched.is_empty() {
        risks.push(NO_MATCHES_RISK.to_string());
    }

    risks.extend(
        gap.missing_critical
            .iter()
            .map(|m| format!("Missing Critical Skill: {}", m.skill_name)),
    );

    if experience.gap < 0.0 {
        let shortfall = format_years(-experience.gap);
        let required = format_years(experience.required_years);
        let label = if experience.penalty_factor < 1.0 {
            "Significant experience deficit"
        } else {
            "Minor experience deficit"
        };
        risks.push(format!(
            "{label}: {shortfall} year(s) below the {required}-year requirement"
        ));
    }

    risks
}

/// Low when neither side produced any matched or missing-critical skill,
/// medium when experience looks unextracted, high otherwise.
pub fn assess_confidence(
    gap: &SkillGapResult,
    experience: &ExperienceMatchResult,
) -> ConfidenceAssessment {
    let mut limitations = vec![BASE_LIMITATION.to_string()];

    let level = if gap.matched.is_empty() && gap.missing_critical.is_empty() {
        limitations.push(NO_SKILLS_LIMITATION.to_string());
        ConfidenceLevel::Low
    } else if experience.actual_years == 0.0 && experience.required_years > 0.0 {
        limitations.push(EXPERIENCE_EXTRACTION_LIMITATION.to_string());
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::High
    };

    ConfidenceAssessment { level, limitations }
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as i64)
    } else {
        format!("{years:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::experience::calculate_experience_match;
    use crate::matching::types::{MatchedSkill, MissingSkill};

    fn gap_with(matched: &[(&str, Importance)], critical: &[&str], optional: &[&str]) -> SkillGapResult {
        SkillGapResult {
            matched: matched
                .iter()
                .map(|(n, i)| MatchedSkill {
                    skill_name: n.to_string(),
                    importance: *i,
                })
                .collect(),
            missing_critical: critical
                .iter()
                .map(|n| MissingSkill {
                    skill_name: n.to_string(),
                })
                .collect(),
            missing_optional: optional
                .iter()
                .map(|n| MissingSkill {
                    skill_name: n.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_strengths_only_for_critical_matches() {
        let gap = gap_with(
            &[("Python", Importance::Critical), ("Docker", Importance::Optional)],
            &[],
            &[],
        );
        assert_eq!(collect_strengths(&gap), vec!["Matched Critical Skill: Python"]);
    }

    #[test]
    fn test_risks_list_missing_critical_and_major_deficit() {
        let gap = gap_with(&[("Python", Importance::Critical)], &["Go"], &["Kafka"]);
        let risks = calculate_risk_flags(&gap, &calculate_experience_match(3.0, 5.0));
        assert_eq!(
            risks,
            vec![
                "Missing Critical Skill: Go".to_string(),
                "Significant experience deficit: 2 year(s) below the 5-year requirement"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_minor_deficit_flagged_without_penalty() {
        let gap = gap_with(&[("Python", Importance::Critical)], &[], &[]);
        let risks = calculate_risk_flags(&gap, &calculate_experience_match(4.0, 5.0));
        assert_eq!(
            risks,
            vec!["Minor experience deficit: 1 year(s) below the 5-year requirement"]
        );
    }

    #[test]
    fn test_no_risks_for_clean_fit() {
        let gap = gap_with(&[("Python", Importance::Critical)], &[], &[]);
        assert!(calculate_risk_flags(&gap, &calculate_experience_match(6.0, 5.0)).is_empty());
    }

    #[test]
    fn test_empty_requirements_flagged() {
        let risks = calculate_risk_flags(
            &SkillGapResult::default(),
            &calculate_experience_match(5.0, 5.0),
        );
        assert_eq!(risks, vec![NO_REQUIREMENTS_RISK]);
    }

    #[test]
    fn test_no_matches_flagged() {
        let gap = gap_with(&[], &["Go"], &[]);
        let risks = calculate_risk_flags(&gap, &calculate_experience_match(5.0, 5.0));
        assert_eq!(risks[0], NO_MATCHES_RISK);
    }

    #[test]
    fn test_confidence_low_when_nothing_found() {
        let gap = gap_with(&[], &[], &["Kafka"]);
        let assessment = assess_confidence(&gap, &calculate_experience_match(0.0, 5.0));
        assert_eq!(assessment.level, ConfidenceLevel::Low);
        assert_eq!(
            assessment.limitations,
            vec![BASE_LIMITATION.to_string(), NO_SKILLS_LIMITATION.to_string()]
        );
    }

    #[test]
    fn test_confidence_medium_when_experience_missing() {
        let gap = gap_with(&[("Python", Importance::Critical)], &[], &[]);
        let assessment = assess_confidence(&gap, &calculate_experience_match(0.0, 3.0));
        assert_eq!(assessment.level, ConfidenceLevel::Medium);
        assert_eq!(assessment.limitations[1], EXPERIENCE_EXTRACTION_LIMITATION);
    }

    #[test]
    fn test_confidence_high_otherwise() {
        let gap = gap_with(&[], &["Go"], &[]);
        let assessment = assess_confidence(&gap, &calculate_experience_match(0.0, 0.0));
        assert_eq!(assessment.level, ConfidenceLevel::High);
        assert_eq!(assessment.limitations, vec![BASE_LIMITATION.to_string()]);
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(2.0), "2");
        assert_eq!(format_years(1.5), "1.5");
    }
}
