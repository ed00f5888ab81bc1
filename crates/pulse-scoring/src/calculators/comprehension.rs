//! Comprehension score: answer accuracy with a confusion penalty and a
//! response-time sweet-spot bonus.

use crate::normalize::{clamp_score, safe_ratio};

/// Bonus window: responses averaging 3-10 seconds earn +10. A step
/// function, not a gradient; outside the window the bonus is 0.
const BONUS_MIN_SECS: f64 = 3.0;
const BONUS_MAX_SECS: f64 = 10.0;

/// Each confusion indicator costs one point.
const CONFUSION_PENALTY_PER_INDICATOR: f64 = 1.0;

/// `clamp(accuracy·100 − confusion + bonus, 0, 100)`.
///
/// Zero total questions yields 0.
pub fn score(
    correct: u32,
    total_questions: u32,
    confusion_indicators: u32,
    avg_response_secs: f64,
) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    let accuracy = safe_ratio(correct as f64, total_questions as f64);
    let penalty = confusion_indicators as f64 * CONFUSION_PENALTY_PER_INDICATOR;
    let bonus = if (BONUS_MIN_SECS..=BONUS_MAX_SECS).contains(&avg_response_secs) {
        10.0
    } else {
        0.0
    };
    clamp_score(accuracy * 100.0 - penalty + bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_questions_yields_zero() {
        assert_eq!(score(10, 0, 0, 5.0), 0.0);
    }

    #[test]
    fn bonus_window_boundaries_inclusive() {
        let base = score(18, 20, 2, 20.0); // no bonus
        assert_eq!(score(18, 20, 2, 3.0), base + 10.0);
        assert_eq!(score(18, 20, 2, 10.0), base + 10.0);
        assert_eq!(score(18, 20, 2, 2.9), base);
        assert_eq!(score(18, 20, 2, 10.1), base);
    }

    #[test]
    fn reference_inputs() {
        // 18/20 = 90, minus 2 confusion points, plus the bonus.
        assert_eq!(score(18, 20, 2, 6.0), 98.0);
    }

    #[test]
    fn heavy_confusion_clamps_at_zero() {
        assert_eq!(score(1, 20, 80, 20.0), 0.0);
    }

    #[test]
    fn perfect_score_clamps_at_hundred() {
        assert_eq!(score(20, 20, 0, 5.0), 100.0);
    }
}
