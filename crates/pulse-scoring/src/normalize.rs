//! Metric normalization helpers shared by the calculators.
//!
//! Policy for untrusted numeric input: a division with a zero (or
//! negative, or non-finite) denominator contributes 0 to its term, and
//! every final score is clamped into [0,100] before rounding.

/// Ratio of `numerator / denominator`, or 0.0 when the denominator is
/// zero, negative, or not finite.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0.0;
    }
    numerator / denominator
}

/// Clamp a raw score into [0,100]. Non-finite values collapse to 0.
pub fn clamp_score(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

/// Round a clamped score to the final integer. The single rounding step
/// in the pipeline; intermediate values stay `f64`.
pub fn round_score(raw: f64) -> u8 {
    clamp_score(raw).round() as u8
}

/// Attention ratio: measured attention over session length, clamped to
/// [0,1]. Zero session duration yields 0.
pub fn attention_ratio(attention_secs: f64, session_secs: f64) -> f64 {
    safe_ratio(attention_secs, session_secs).clamp(0.0, 1.0)
}

/// Sustained-attention bonus: `1 + 0.2·ln(1 + ratio)`. Rewards sustained
/// high ratios super-linearly; bounded because the ratio is at most 1.
pub fn sustained_bonus(ratio: f64) -> f64 {
    1.0 + 0.2 * (1.0 + ratio).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_ratio_zero_denominator() {
        assert_eq!(safe_ratio(10.0, 0.0), 0.0);
        assert_eq!(safe_ratio(10.0, -5.0), 0.0);
        assert_eq!(safe_ratio(10.0, f64::NAN), 0.0);
        assert_eq!(safe_ratio(f64::INFINITY, 10.0), 0.0);
    }

    #[test]
    fn safe_ratio_normal_division() {
        assert_eq!(safe_ratio(30.0, 60.0), 0.5);
    }

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(130.0), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn round_score_rounds_to_nearest() {
        assert_eq!(round_score(82.252), 82);
        assert_eq!(round_score(82.5), 83);
        assert_eq!(round_score(150.0), 100);
    }

    #[test]
    fn attention_ratio_clamped_to_unit() {
        assert_eq!(attention_ratio(4000.0, 3000.0), 1.0);
        assert_eq!(attention_ratio(1500.0, 3000.0), 0.5);
        assert_eq!(attention_ratio(1500.0, 0.0), 0.0);
    }

    #[test]
    fn sustained_bonus_bounded() {
        assert_eq!(sustained_bonus(0.0), 1.0);
        let max = sustained_bonus(1.0);
        assert!(max > 1.13 && max < 1.14);
    }
}
