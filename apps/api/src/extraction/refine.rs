//! AI-assisted importance refinement and the merge with the heuristic map.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::extraction::prompts::{JD_SKILL_PROMPT_TEMPLATE, JD_SKILL_SYSTEM};
use crate::llm_client::prompts::ALLOW_LIST_INSTRUCTION;
use crate::llm_client::{GenerationOutcome, TextGenerationService};
use crate::models::skill::{Importance, SkillCatalog};

/// Only this many characters of raw JD text are sent to the model.
pub const AI_TEXT_LIMIT: usize = 4000;

/// Merges AI-reported importance into the heuristic map.
/// On a key collision the AI value wins; heuristic-only keys are kept.
pub fn merge_importance(
    heuristic: &BTreeMap<i64, Importance>,
    ai: &BTreeMap<i64, Importance>,
) -> BTreeMap<i64, Importance> {
    let mut merged = heuristic.clone();
    merged.extend(ai.iter().map(|(&id, &importance)| (id, importance)));
    merged
}

pub fn build_prompt(raw_text: &str, catalog: &SkillCatalog) -> String {
    let truncated: String = raw_text.chars().take(AI_TEXT_LIMIT).collect();
    JD_SKILL_PROMPT_TEMPLATE
        .replace("{allowed_skills}", &catalog.names().join(", "))
        .replace("{allow_list_rule}", ALLOW_LIST_INSTRUCTION)
        .replace("{jd_text}", &truncated)
}

/// Schema-checks the model response into skill id → importance.
///
/// Accepts a bare list or an object whose first list-valued field holds it.
/// Items naming a skill outside the catalog, or carrying an importance other than
/// critical/optional, are dropped. A missing importance reads as critical.
pub fn parse_ai_importance(
    value: Value,
    catalog: &SkillCatalog,
) -> Result<BTreeMap<i64, Importance>, String> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .into_iter()
            .find_map(|(_, v)| match v {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .ok_or_else(|| "response object has no list field".to_string())?,
        other => return Err(format!("expected a JSON list, got {other}")),
    };

    let mut parsed = BTreeMap::new();
    for item in items {
        let Some(skill) = item.get("skill").and_then(Value::as_str) else {
            debug!("Dropping AI item without a skill name: {item}");
            continue;
        };
        let Some(entry) = catalog.find_by_name(skill) else {
            debug!("Dropping AI skill outside the catalog: {skill}");
            continue;
        };
        let importance = match item.get("importance") {
            None | Some(Value::Null) => Importance::Critical,
            Some(Value::String(s)) => match s.parse::<Importance>() {
                Ok(importance) => importance,
                Err(e) => {
                    debug!("Dropping AI skill {skill}: {e}");
                    continue;
                }
            },
            Some(other) => {
                debug!("Dropping AI skill {skill}: importance {other} is not a string");
                continue;
            }
        };
        parsed.insert(entry.id, importance);
    }

    Ok(parsed)
}

/// Issues the single constrained query and returns the validated AI map.
pub async fn query_ai_importance(
    text_gen: &dyn TextGenerationService,
    raw_text: &str,
    catalog: &SkillCatalog,
) -> GenerationOutcome<BTreeMap<i64, Importance>> {
    if catalog.is_empty() {
        return GenerationOutcome::Success(BTreeMap::new());
    }
    let prompt = build_prompt(raw_text, catalog);
    text_gen
        .complete_json(JD_SKILL_SYSTEM, &prompt)
        .await
        .and_then(|value| parse_ai_importance(value, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::SkillCatalogEntry;
    use serde_json::json;

    fn catalog() -> SkillCatalog {
        SkillCatalog::new(vec![
            SkillCatalogEntry {
                id: 1,
                name: "Python".to_string(),
            },
            SkillCatalogEntry {
                id: 2,
                name: "Docker".to_string(),
            },
        ])
    }

    #[test]
    fn test_merge_ai_overwrites_on_collision() {
        let heuristic = BTreeMap::from([(1, Importance::Optional), (2, Importance::Critical)]);
        let ai = BTreeMap::from([(1, Importance::Critical), (3, Importance::Optional)]);
        let merged = merge_importance(&heuristic, &ai);
        assert_eq!(
            merged,
            BTreeMap::from([
                (1, Importance::Critical),
                (2, Importance::Critical),
                (3, Importance::Optional),
            ])
        );
    }

    #[test]
    fn test_merge_with_empty_ai_is_identity() {
        let heuristic = BTreeMap::from([(1, Importance::Optional)]);
        assert_eq!(merge_importance(&heuristic, &BTreeMap::new()), heuristic);
    }

    #[test]
    fn test_parse_bare_list() {
        let parsed = parse_ai_importance(
            json!([
                {"skill": "python", "importance": "Optional"},
                {"skill": "Docker"}
            ]),
            &catalog(),
        )
        .unwrap();
        assert_eq!(
            parsed,
            BTreeMap::from([(1, Importance::Optional), (2, Importance::Critical)])
        );
    }

    #[test]
    fn test_parse_wrapped_list() {
        let parsed = parse_ai_importance(
            json!({"skills": [{"skill": "Docker", "importance": "critical"}]}),
            &catalog(),
        )
        .unwrap();
        assert_eq!(parsed, BTreeMap::from([(2, Importance::Critical)]));
    }

    #[test]
    fn test_parse_drops_unknown_and_invalid_items() {
        let parsed = parse_ai_importance(
            json!([
                {"skill": "Rust", "importance": "critical"},
                {"skill": "Python", "importance": "mandatory"},
                {"skill": "Docker", "importance": 3},
                {"importance": "critical"}
            ]),
            &catalog(),
        )
        .unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_list() {
        assert!(parse_ai_importance(json!("python"), &catalog()).is_err());
        assert!(parse_ai_importance(json!({"summary": "none"}), &catalog()).is_err());
    }

    #[test]
    fn test_prompt_truncates_raw_text() {
        let raw = "a".repeat(AI_TEXT_LIMIT + 500);
        let prompt = build_prompt(&raw, &catalog());
        assert!(prompt.contains(&"a".repeat(AI_TEXT_LIMIT)));
        assert!(!prompt.contains(&"a".repeat(AI_TEXT_LIMIT + 1)));
        assert!(prompt.contains("[Python, Docker]"));
    }
}
