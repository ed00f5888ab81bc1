//! Attention score: attention ratio scaled by measurement confidence and
//! the sustained-attention bonus.

use crate::normalize::{attention_ratio, clamp_score, sustained_bonus};

/// `min(100, ratio · confidence · bonus · 100)`.
///
/// `confidence` is the upstream estimator's measurement confidence in
/// (0,1]. Zero session duration yields 0.
pub fn score(attention_secs: f64, session_secs: f64, confidence: f64) -> f64 {
    let ratio = attention_ratio(attention_secs, session_secs);
    clamp_score(ratio * confidence * sustained_bonus(ratio) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_session_duration_yields_zero() {
        assert_eq!(score(2400.0, 0.0, 0.92), 0.0);
    }

    #[test]
    fn reference_inputs() {
        // ratio 0.8, confidence 0.92: 0.8 * 0.92 * (1 + 0.2*ln(1.8)) * 100
        let result = score(2400.0, 3000.0, 0.92);
        assert!((result - 82.25).abs() < 0.01, "got {result}");
    }

    #[test]
    fn monotone_in_attention_ratio() {
        let mut previous = 0.0;
        for attention in (0..=30).map(|i| i as f64 * 100.0) {
            let current = score(attention, 3000.0, 0.9);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn full_attention_cannot_exceed_hundred() {
        assert!(score(3000.0, 3000.0, 1.0) <= 100.0);
        // Over-reported attention clamps at ratio 1.0.
        assert_eq!(score(9000.0, 3000.0, 1.0), score(3000.0, 3000.0, 1.0));
    }
}
