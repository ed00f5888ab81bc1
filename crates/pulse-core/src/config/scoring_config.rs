//! Scoring engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the score calculators.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Measurement confidence applied to the attention score, in (0,1].
    /// Default: 0.92.
    pub confidence_factor: Option<f64>,
    /// Exam percentage at or above which a student passes. Default: 60.
    pub pass_threshold: Option<f64>,
    /// Exam percentage at or above which a result counts as excellent.
    /// Default: 90.
    pub excellence_threshold: Option<f64>,
}

impl ScoringConfig {
    /// Returns the effective confidence factor, defaulting to 0.92.
    pub fn effective_confidence_factor(&self) -> f64 {
        self.confidence_factor.unwrap_or(0.92)
    }

    /// Returns the effective pass threshold, defaulting to 60.
    pub fn effective_pass_threshold(&self) -> f64 {
        self.pass_threshold.unwrap_or(60.0)
    }

    /// Returns the effective excellence threshold, defaulting to 90.
    pub fn effective_excellence_threshold(&self) -> f64 {
        self.excellence_threshold.unwrap_or(90.0)
    }
}
