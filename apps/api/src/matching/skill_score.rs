use crate::matching::round2;
use crate::matching::types::{Importance, SkillGapResult};

/// Weighted coverage of the JD requirements: Σ matched weight / Σ total weight,
/// rounded to 2 decimals. Critical weighs 2.0, optional 1.0.
///
/// A JD with no extracted requirements scores 0.0; the risk classifier flags it
/// separately so the zero is not mistaken for a genuine miss.
pub fn calculate_skill_score(gap: &SkillGapResult) -> f64 {
    let matched_weight: f64 = gap.matched.iter().map(|m| m.importance.weight()).sum();
    let missing_weight = gap.missing_critical.len() as f64 * Importance::Critical.weight()
        + gap.missing_optional.len() as f64 * Importance::Optional.weight();
    let total_weight = matched_weight + missing_weight;

    if total_weight <= 0.0 {
        return 0.0;
    }

    round2((matched_weight / total_weight).clamp(0.0, 1.0))
}
