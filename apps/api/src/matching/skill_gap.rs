use std::collections::{HashMap, HashSet};

use crate::matching::types::{
    Importance, MatchInput, MatchedSkill, MissingSkill, SkillGapResult, MATCH_THRESHOLD,
};

/// Partitions the JD requirements into matched / missing_critical / missing_optional.
///
/// A requirement is matched iff the resume carries the same skill id with
/// confidence ≥ `MATCH_THRESHOLD`. Duplicate requirements for one skill id are
/// collapsed onto the first occurrence so the partition stays disjoint.
pub fn evaluate_skill_gap(input: &MatchInput) -> SkillGapResult {
    let mut best_confidence: HashMap<i64, f64> = HashMap::new();
    for obs in &input.resume_skills {
        let slot = best_confidence.entry(obs.skill_id).or_insert(obs.confidence);
        if obs.confidence > *slot {
            *slot = obs.confidence;
        }
    }

    let mut seen = HashSet::new();
    let mut result = SkillGapResult::default();

    for req in &input.jd_skills {
        if !seen.insert(req.skill_id) {
            continue;
        }

        let matched = best_confidence
            .get(&req.skill_id)
            .is_some_and(|&c| c >= MATCH_THRESHOLD);

        if matched {
            result.matched.push(MatchedSkill {
                skill_name: req.skill_name.clone(),
                importance: req.importance,
            });
        } else {
            let missing = MissingSkill {
                skill_name: req.skill_name.clone(),
            };
            match req.importance {
                Importance::Critical => result.missing_critical.push(missing),
                Importance::Optional => result.missing_optional.push(missing),
            }
        }
    }

    result
}
