//! Participation score: capped hand-raise component plus accuracy and
//! time-share components.

use crate::normalize::safe_ratio;

/// Hand raises contribute 20 points each, capped at 40 (two raises).
pub fn hand_raise_component(hand_raises: u32) -> f64 {
    (hand_raises as f64 * 20.0).min(40.0)
}

/// Answer accuracy contributes up to 30 points. Zero total responses
/// contributes nothing.
pub fn accuracy_component(correct: u32, total: u32) -> f64 {
    safe_ratio(correct as f64, total as f64) * 30.0
}

/// Share of the class window spent participating, worth up to 30 points.
pub fn time_component(participation_secs: f64, class_secs: f64) -> f64 {
    (safe_ratio(participation_secs, class_secs) * 30.0).clamp(0.0, 30.0)
}

/// `min(100, hand + accuracy + time)`.
pub fn score(
    hand_raises: u32,
    correct: u32,
    total_responses: u32,
    participation_secs: f64,
    class_secs: f64,
) -> f64 {
    let sum = hand_raise_component(hand_raises)
        + accuracy_component(correct, total_responses)
        + time_component(participation_secs, class_secs);
    sum.min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_raise_cap_reached_at_two() {
        assert_eq!(hand_raise_component(0), 0.0);
        assert_eq!(hand_raise_component(1), 20.0);
        assert_eq!(hand_raise_component(2), 40.0);
        assert_eq!(hand_raise_component(3), 40.0);
        assert_eq!(hand_raise_component(50), 40.0);
    }

    #[test]
    fn zero_responses_drops_accuracy_component() {
        assert_eq!(accuracy_component(10, 0), 0.0);
        assert_eq!(score(0, 10, 0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn accuracy_scales_with_correctness() {
        assert_eq!(accuracy_component(15, 30), 15.0);
        assert_eq!(accuracy_component(30, 30), 30.0);
    }

    #[test]
    fn time_component_clamped() {
        // Participation longer than the class window still caps at 30.
        assert_eq!(time_component(4000.0, 3000.0), 30.0);
        assert_eq!(time_component(1800.0, 3000.0), 18.0);
        assert_eq!(time_component(1800.0, 0.0), 0.0);
    }

    #[test]
    fn total_capped_at_hundred() {
        assert_eq!(score(5, 30, 30, 3000.0, 3000.0), 100.0);
    }
}
