//! Teacher effectiveness: weighted composite over class-level rates,
//! with a dispersion penalty on uneven per-student engagement.

use statrs::statistics::Statistics;

use pulse_core::EffectivenessWeights;

use crate::normalize::{clamp_score, safe_ratio};

/// The composite plus the class-level rates that feed it. The rates are
/// surfaced as `ClassMetrics` in the final `ScoreSet`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivenessBreakdown {
    pub overall: f64,
    pub engagement_rate: f64,
    pub participation_rate: f64,
    pub comprehension_rate: f64,
    pub attention_consistency: f64,
}

/// Consistency: `max(0, 100 − variance/10)` over per-student engagement
/// samples. Population variance (mean of squared deviations); fewer than
/// two samples count as perfectly consistent.
pub fn attention_consistency(samples: &[f64]) -> f64 {
    let variance = if samples.len() > 1 {
        samples.population_variance()
    } else {
        0.0
    };
    (100.0 - variance / 10.0).max(0.0)
}

/// Weighted effectiveness composite under the given profile.
///
/// Empty sample sets and zero student counts contribute 0 to their rate.
pub fn score(
    weights: &EffectivenessWeights,
    student_engagements: &[f64],
    active_participants: u32,
    total_students: u32,
    comprehension_rate: f64,
) -> EffectivenessBreakdown {
    let engagement_rate = if student_engagements.is_empty() {
        0.0
    } else {
        student_engagements.mean()
    };
    let participation_rate =
        safe_ratio(active_participants as f64, total_students as f64) * 100.0;
    let consistency = attention_consistency(student_engagements);

    let overall = clamp_score(weights.combine(
        engagement_rate,
        participation_rate,
        comprehension_rate,
        consistency,
    ));

    EffectivenessBreakdown {
        overall,
        engagement_rate: clamp_score(engagement_rate),
        participation_rate: clamp_score(participation_rate),
        comprehension_rate: clamp_score(comprehension_rate),
        attention_consistency: clamp_score(consistency),
    }
}
