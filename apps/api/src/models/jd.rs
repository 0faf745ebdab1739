use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobDescriptionRow {
    pub id: Uuid,
    pub raw_text: String,
    /// Segmented sections produced by the upstream JD parser.
    pub parsed_json: Option<Value>,
    pub min_years_experience: f64,
}

impl JobDescriptionRow {
    /// Returns the segmented sections, or `None` when the JD was never segmented.
    pub fn sections(&self) -> Option<JdSections> {
        let sections = self.parsed_json.as_ref()?.as_object()?;
        if sections.is_empty() {
            return None;
        }
        let text = |key: &str| {
            sections
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Some(JdSections {
            requirements: text("requirements"),
            nice_to_have: text("nice_to_have"),
            responsibilities: text("responsibilities"),
        })
    }
}

/// Section texts consumed by the skill extractor. Missing or null sections read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JdSections {
    pub requirements: String,
    pub nice_to_have: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JdSkillRow {
    pub jd_id: Uuid,
    pub skill_id: i64,
    pub importance: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_jd(parsed_json: Option<Value>) -> JobDescriptionRow {
        JobDescriptionRow {
            id: Uuid::new_v4(),
            raw_text: "raw".to_string(),
            parsed_json,
            min_years_experience: 3.0,
        }
    }

    #[test]
    fn test_sections_missing_fields_default_empty() {
        let jd = make_jd(Some(json!({"requirements": "Must know Rust"})));
        let sections = jd.sections().unwrap();
        assert_eq!(sections.requirements, "Must know Rust");
        assert!(sections.nice_to_have.is_empty());
        assert!(sections.responsibilities.is_empty());
    }

    #[test]
    fn test_sections_null_reads_as_empty() {
        let jd = make_jd(Some(json!({"requirements": "Go", "nice_to_have": null})));
        let sections = jd.sections().unwrap();
        assert_eq!(sections.requirements, "Go");
        assert!(sections.nice_to_have.is_empty());
    }

    #[test]
    fn test_sections_none_when_unparsed() {
        assert!(make_jd(None).sections().is_none());
        assert!(make_jd(Some(json!({}))).sections().is_none());
    }
}
