use std::sync::OnceLock;

use regex::Regex;

use crate::matching::types::{ExperienceMatchResult, ExperienceStatus};

/// Penalty factor when the deficit is at most `DEFICIT_TOLERANCE_YEARS`.
pub const NO_PENALTY: f64 = 1.0;
/// Penalty factor when the deficit exceeds `DEFICIT_TOLERANCE_YEARS`.
pub const MAJOR_DEFICIT_PENALTY: f64 = 0.85;
/// A deficit of exactly this many years is still unpenalized.
pub const DEFICIT_TOLERANCE_YEARS: f64 = 1.0;

/// Compares actual against required years.
///
/// gap = actual − required. Status is `Deficit` for any negative gap, but only a
/// gap strictly below −1 year lowers the penalty factor to 0.85.
pub fn calculate_experience_match(actual_years: f64, required_years: f64) -> ExperienceMatchResult {
    let actual_years = actual_years.max(0.0);
    let required_years = required_years.max(0.0);
    let gap = actual_years - required_years;

    let status = if gap >= 0.0 {
        ExperienceStatus::Sufficient
    } else {
        ExperienceStatus::Deficit
    };

    let penalty_factor = if gap < -DEFICIT_TOLERANCE_YEARS {
        MAJOR_DEFICIT_PENALTY
    } else {
        NO_PENALTY
    };

    ExperienceMatchResult {
        required_years,
        actual_years,
        gap,
        status,
        penalty_factor,
    }
}

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)\b")
            .expect("years-of-experience pattern is valid")
    })
}

/// Pulls the largest "N years" / "N+ yrs" figure out of a resume experience section.
/// Returns `None` when no figure is present.
pub fn extract_years_of_experience(text: &str) -> Option<f64> {
    years_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .fold(None, |best: Option<f64>, years| {
            Some(best.map_or(years, |b| b.max(years)))
        })
}
