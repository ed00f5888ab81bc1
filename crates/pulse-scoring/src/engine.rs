//! ScoringEngine — the single entry point over the calculators.
//!
//! Holds the configuration and weight profiles; exposes the per-event
//! formula path (`evaluate`) and the aggregate multi-source path
//! (`evaluate_blended`). Both clamp and round exactly once, never panic
//! on numeric input, and never return a value outside [0,100].

use pulse_core::{
    AudioMetrics, ClassMetrics, EffectivenessWeights, EngagementWeights, LiveMetrics,
    RawMetrics, ScoreSet, ScoringConfig, SourceWeights,
};

use crate::calculators::{
    attention, comprehension, effectiveness, emotion, engagement, pace, participation,
};
use crate::composite;
use crate::exam::ExamSummary;
use crate::normalize::round_score;

/// The scoring engine for one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
    engagement_weights: EngagementWeights,
    effectiveness_weights: EffectivenessWeights,
    source_weights: SourceWeights,
}

impl ScoringEngine {
    /// Engine with default weight profiles.
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Override the weight profiles (strategy injection for tests and
    /// alternative tunings).
    pub fn with_weights(
        mut self,
        engagement: EngagementWeights,
        effectiveness: EffectivenessWeights,
        source: SourceWeights,
    ) -> Self {
        self.engagement_weights = engagement;
        self.effectiveness_weights = effectiveness;
        self.source_weights = source;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn engagement_weights(&self) -> &EngagementWeights {
        &self.engagement_weights
    }

    pub fn effectiveness_weights(&self) -> &EffectivenessWeights {
        &self.effectiveness_weights
    }

    /// Formula path: score a full `RawMetrics` snapshot.
    pub fn evaluate(&self, metrics: &RawMetrics) -> ScoreSet {
        let attention_score = attention::score(
            metrics.attention_duration_secs,
            metrics.session_duration_secs,
            metrics.confidence_factor,
        );
        let emotion_score = emotion::score(
            metrics.positive_signal,
            metrics.negative_signal,
            metrics.total_signal,
        );
        let participation_score = participation::score(
            metrics.hand_raises,
            metrics.correct_answers,
            metrics.total_responses,
            metrics.participation_secs,
            metrics.class_duration_secs,
        );
        let overall = engagement::score(
            &self.engagement_weights,
            attention_score,
            emotion_score,
            participation_score,
            metrics.interaction_signal,
        );
        let comprehension_score = comprehension::score(
            metrics.comprehension_correct,
            metrics.comprehension_total,
            metrics.confusion_indicators,
            metrics.avg_response_time_secs,
        );
        let breakdown = effectiveness::score(
            &self.effectiveness_weights,
            &metrics.student_engagements,
            metrics.active_participants,
            metrics.total_students,
            comprehension_score,
        );
        let pace_score = pace::score(metrics.words_spoken, metrics.speech_duration_mins);

        tracing::debug!(
            attention = attention_score,
            emotion = emotion_score,
            participation = participation_score,
            overall,
            "evaluated raw metrics"
        );

        ScoreSet {
            attention_score: round_score(attention_score),
            emotion_score: round_score(emotion_score),
            participation_score: round_score(participation_score),
            overall_engagement: round_score(overall),
            comprehension_score: round_score(comprehension_score),
            teacher_effectiveness: round_score(breakdown.overall),
            pace_score: round_score(pace_score),
            class_metrics: ClassMetrics {
                engagement_rate: round_score(breakdown.engagement_rate),
                participation_rate: round_score(breakdown.participation_rate),
                attention_consistency: round_score(breakdown.attention_consistency),
            },
        }
    }

    /// Aggregate path: blend exam, video, and audio signals.
    pub fn evaluate_blended(
        &self,
        exam: &ExamSummary,
        video: &LiveMetrics,
        audio: &AudioMetrics,
    ) -> ScoreSet {
        composite::score_set(&self.source_weights, exam, video, audio)
    }
}
