//! Overall engagement: weighted combination of attention, emotion,
//! participation, and the external interaction signal.

use pulse_core::EngagementWeights;

use crate::normalize::clamp_score;

/// Weighted sum under the given profile, clamped into [0,100].
pub fn score(
    weights: &EngagementWeights,
    attention: f64,
    emotion: f64,
    participation: f64,
    interaction: f64,
) -> f64 {
    clamp_score(weights.combine(attention, emotion, participation, interaction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_weighted_sum() {
        let weights = EngagementWeights::default();
        let result = score(&weights, 80.0, 60.0, 70.0, 90.0);
        // 80*0.35 + 60*0.25 + 70*0.20 + 90*0.20 = 28 + 15 + 14 + 18
        assert!((result - 75.0).abs() < 1e-9);
    }

    #[test]
    fn misconfigured_weights_still_clamped() {
        let weights = EngagementWeights {
            attention: 1.0,
            emotion: 1.0,
            participation: 1.0,
            interaction: 1.0,
        };
        assert_eq!(score(&weights, 80.0, 80.0, 80.0, 80.0), 100.0);
    }
}
