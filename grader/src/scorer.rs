//! # Scorer Module
//!
//! Turns test tallies into a correctness level and combines the four
//! sub-scores of a grading pass into one weighted level.

use crate::types::{MAX_LEVEL, MIN_LEVEL, TestTally};

/// Weight of each style check (header, IPO, variable names).
pub const STYLE_WEIGHT: f64 = 1.0;
/// Weight of the correctness check.
pub const CORRECTNESS_WEIGHT: f64 = 4.0;

/// Rounds to one decimal place on the exact decimal value of `x`, halves to
/// even. `0.05` is stored slightly above the half and rounds up; `0.15` is
/// stored slightly below and rounds down.
#[inline]
pub fn round1(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(x)
}

/// Correctness level for a tally: `4 * passed / (passed + failed)`, rounded.
///
/// Returns `None` when the tally is empty, so callers can give guidance
/// instead of dividing by zero.
pub fn level_from_tally(tally: TestTally) -> Option<f64> {
    if tally.total() == 0 {
        return None;
    }
    Some(round1(MAX_LEVEL * f64::from(tally.passed) / f64::from(tally.total())))
}

/// Weighted mean of the four sub-score levels, rounded to one decimal.
///
/// # Example
///
/// ```
/// use grader::scorer::weighted_level;
///
/// // (4 + 4 + 4 + 4 * 2) / 7 = 2.857...
/// assert_eq!(weighted_level(4.0, 4.0, 4.0, 2.0), 2.9);
/// assert_eq!(weighted_level(0.0, 0.0, 0.0, 0.0), 0.0);
/// ```
pub fn weighted_level(header: f64, ipo: f64, variables: f64, correctness: f64) -> f64 {
    let total_weight = 3.0 * STYLE_WEIGHT + CORRECTNESS_WEIGHT;
    let weighted =
        STYLE_WEIGHT * (header + ipo + variables) + CORRECTNESS_WEIGHT * correctness;
    round1(weighted / total_weight).clamp(MIN_LEVEL, MAX_LEVEL)
}
