//! Emotion score: signed positive/negative ratio mapped onto [0,100]
//! centered at 50.

use crate::normalize::clamp_score;

/// `50 + ((positive − negative)/total)·50`.
///
/// Zero total signal yields the neutral 50. When positive and negative
/// are percentages summing to 100, negative is 100 − positive by
/// construction.
pub fn score(positive: f64, negative: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 50.0;
    }
    clamp_score(50.0 + ((positive - negative) / total) * 50.0)
}
