//! Risk score aggregation and label thresholds.
//!
//! score = 0.10 * detected_tactics + 0.25 per boost group present, clamped to
//! at most 1.0. Labels are assigned from the unrounded score; only the
//! reported value is rounded to two decimals.

use super::catalog::TacticCatalog;
use super::detect::contains_any;
use super::Label;

pub const PER_TACTIC: f64 = 0.10;
pub const BOOST: f64 = 0.25;

/// Inclusive lower bound for `manipulative`.
pub const MANIPULATIVE_MIN: f64 = 0.75;
/// Inclusive upper bound for `legitimate` (also requires zero tactics).
pub const LEGITIMATE_MAX: f64 = 0.25;

/// Risk score in [0.0, 1.0] for `text` given the tactics already detected in it.
pub fn score(catalog: &TacticCatalog, text: &str, tactics: &[String]) -> f64 {
    score_lowered(catalog, &text.to_lowercase(), tactics.len())
}

pub(crate) fn score_lowered(catalog: &TacticCatalog, lowered: &str, tactic_count: usize) -> f64 {
    let mut total = PER_TACTIC * tactic_count as f64;
    for boost in catalog.boosts() {
        if contains_any(lowered, &boost.keywords) {
            total += BOOST;
        }
    }
    total.min(1.0)
}

pub fn label(score: f64, tactic_count: usize) -> Label {
    if score >= MANIPULATIVE_MIN {
        Label::Manipulative
    } else if score <= LEGITIMATE_MAX && tactic_count == 0 {
        Label::Legitimate
    } else {
        Label::Uncertain
    }
}

/// Presentation rounding (two decimals).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
