//! Deterministic scoring chain: skill gap → skill score, experience match →
//! final composite score, plus the qualitative risk/confidence classifier.
//!
//! Everything here is pure and synchronous. No I/O, no shared state.

pub mod experience;
pub mod final_score;
pub mod risk;
pub mod skill_gap;
pub mod skill_score;
pub mod types;

pub use experience::{calculate_experience_match, extract_years_of_experience};
pub use final_score::calculate_final_score;
pub use risk::{assess_confidence, calculate_risk_flags, collect_strengths};
pub use skill_gap::evaluate_skill_gap;
pub use skill_score::calculate_skill_score;

/// Rounds to two decimal places, the precision of every published score.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
