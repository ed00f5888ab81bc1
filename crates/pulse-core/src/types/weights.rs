//! Weight profiles — named sets of weights summing to 1.0, passed to the
//! calculators explicitly rather than hardcoded in each formula.

use serde::{Deserialize, Serialize};

/// Tolerance for the sum-to-one invariant.
const SUM_EPSILON: f64 = 1e-9;

/// Weights for the overall-engagement composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementWeights {
    pub attention: f64,
    pub emotion: f64,
    pub participation: f64,
    pub interaction: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            attention: 0.35,
            emotion: 0.25,
            participation: 0.20,
            interaction: 0.20,
        }
    }
}

impl EngagementWeights {
    pub fn sum(&self) -> f64 {
        self.attention + self.emotion + self.participation + self.interaction
    }

    /// Whether the profile sums to 1.0 within rounding tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= SUM_EPSILON
    }

    /// Linear combination of the four sub-scores.
    pub fn combine(
        &self,
        attention: f64,
        emotion: f64,
        participation: f64,
        interaction: f64,
    ) -> f64 {
        attention * self.attention
            + emotion * self.emotion
            + participation * self.participation
            + interaction * self.interaction
    }
}

/// Weights for the teacher-effectiveness composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectivenessWeights {
    pub engagement_rate: f64,
    pub participation_rate: f64,
    pub comprehension_rate: f64,
    pub attention_consistency: f64,
}

impl Default for EffectivenessWeights {
    fn default() -> Self {
        Self {
            engagement_rate: 0.30,
            participation_rate: 0.25,
            comprehension_rate: 0.25,
            attention_consistency: 0.20,
        }
    }
}

impl EffectivenessWeights {
    pub fn sum(&self) -> f64 {
        self.engagement_rate
            + self.participation_rate
            + self.comprehension_rate
            + self.attention_consistency
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= SUM_EPSILON
    }

    pub fn combine(
        &self,
        engagement_rate: f64,
        participation_rate: f64,
        comprehension_rate: f64,
        attention_consistency: f64,
    ) -> f64 {
        engagement_rate * self.engagement_rate
            + participation_rate * self.participation_rate
            + comprehension_rate * self.comprehension_rate
            + attention_consistency * self.attention_consistency
    }
}

/// Weights for blending exam, video, and audio components of a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceWeights {
    pub exam: f64,
    pub video: f64,
    pub audio: f64,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            exam: 0.40,
            video: 0.35,
            audio: 0.25,
        }
    }
}

impl SourceWeights {
    pub fn sum(&self) -> f64 {
        self.exam + self.video + self.audio
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= SUM_EPSILON
    }

    pub fn combine(&self, exam: f64, video: f64, audio: f64) -> f64 {
        exam * self.exam + video * self.video + audio * self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_sum_to_one() {
        assert!(EngagementWeights::default().is_normalized());
        assert!(EffectivenessWeights::default().is_normalized());
        assert!(SourceWeights::default().is_normalized());
    }

    #[test]
    fn effectiveness_weights_sum_exactly() {
        // 0.30 + 0.25 + 0.25 + 0.20
        let weights = EffectivenessWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn misconfigured_profile_detected() {
        let weights = EngagementWeights {
            attention: 0.5,
            emotion: 0.5,
            participation: 0.5,
            interaction: 0.5,
        };
        assert!(!weights.is_normalized());
    }

    #[test]
    fn combine_is_linear() {
        let weights = EngagementWeights::default();
        assert!((weights.combine(100.0, 100.0, 100.0, 100.0) - 100.0).abs() < 1e-9);
        assert_eq!(weights.combine(0.0, 0.0, 0.0, 0.0), 0.0);
    }
}
