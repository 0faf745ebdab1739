use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub parsed_json: Option<Value>,
}

impl ResumeRow {
    /// Text of the `experience` section, empty when the resume was not segmented.
    pub fn experience_section(&self) -> &str {
        self.parsed_json
            .as_ref()
            .and_then(|v| v.get("experience"))
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSkillRow {
    pub resume_id: Uuid,
    pub skill_id: i64,
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_experience_section_present() {
        let resume = ResumeRow {
            id: Uuid::new_v4(),
            parsed_json: Some(json!({"experience": "6 years at Acme"})),
        };
        assert_eq!(resume.experience_section(), "6 years at Acme");
    }

    #[test]
    fn test_experience_section_absent() {
        let resume = ResumeRow {
            id: Uuid::new_v4(),
            parsed_json: None,
        };
        assert_eq!(resume.experience_section(), "");
    }
}
