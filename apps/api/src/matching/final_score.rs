use crate::matching::experience::NO_PENALTY;
use crate::matching::round2;

pub const SKILL_WEIGHT: f64 = 0.7;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;

/// Experience sub-score for an unpenalized match.
pub const FULL_EXPERIENCE_SUB_SCORE: f64 = 1.0;
/// Experience sub-score for any penalty factor below 1.0 (in practice 0.85).
pub const DEFICIT_EXPERIENCE_SUB_SCORE: f64 = 0.5;

/// Maps the stored penalty factor onto the sub-score used in the composite.
///
/// The factor is stored as {1.0, 0.85} but the composite consumes {1.0, 0.5}.
/// This table is the single place the two domains meet.
pub fn experience_sub_score(penalty_factor: f64) -> f64 {
    if penalty_factor >= NO_PENALTY {
        FULL_EXPERIENCE_SUB_SCORE
    } else {
        DEFICIT_EXPERIENCE_SUB_SCORE
    }
}

/// overall = skill_score × 0.7 + experience_sub_score × 0.3, rounded to 2 decimals.
pub fn calculate_final_score(skill_score: f64, penalty_factor: f64) -> f64 {
    let composite = skill_score.clamp(0.0, 1.0) * SKILL_WEIGHT
        + experience_sub_score(penalty_factor) * EXPERIENCE_WEIGHT;
    round2(composite.clamp(0.0, 1.0))
}
