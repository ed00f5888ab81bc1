//! Score output types — the engine's contract with the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven named scores, in the fixed order used for delta detection
/// and alert emission. The order is part of the contract: alerts fire in
/// this order, never re-ordered by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Attention,
    Emotion,
    Participation,
    OverallEngagement,
    Comprehension,
    TeacherEffectiveness,
    Pace,
}

impl ScoreKind {
    /// All kinds in enumeration order.
    pub const ALL: [ScoreKind; 7] = [
        ScoreKind::Attention,
        ScoreKind::Emotion,
        ScoreKind::Participation,
        ScoreKind::OverallEngagement,
        ScoreKind::Comprehension,
        ScoreKind::TeacherEffectiveness,
        ScoreKind::Pace,
    ];

    /// Human-readable label for narration collaborators.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreKind::Attention => "attention",
            ScoreKind::Emotion => "emotion",
            ScoreKind::Participation => "participation",
            ScoreKind::OverallEngagement => "overall engagement",
            ScoreKind::Comprehension => "comprehension",
            ScoreKind::TeacherEffectiveness => "teacher effectiveness",
            ScoreKind::Pace => "speaking pace",
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreKind::Attention => write!(f, "attention_score"),
            ScoreKind::Emotion => write!(f, "emotion_score"),
            ScoreKind::Participation => write!(f, "participation_score"),
            ScoreKind::OverallEngagement => write!(f, "overall_engagement"),
            ScoreKind::Comprehension => write!(f, "comprehension_score"),
            ScoreKind::TeacherEffectiveness => write!(f, "teacher_effectiveness"),
            ScoreKind::Pace => write!(f, "pace_score"),
        }
    }
}

/// Class-level breakdown feeding the teacher-effectiveness composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClassMetrics {
    /// Mean of per-student engagement samples.
    pub engagement_rate: u8,
    /// Active participants over total students, as a percentage.
    pub participation_rate: u8,
    /// Dispersion penalty: 100 minus a tenth of the engagement variance.
    pub attention_consistency: u8,
}

/// One evaluation cycle's output. All scores are integers in [0,100];
/// field names are stable so the UI can animate deltas across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreSet {
    pub attention_score: u8,
    pub emotion_score: u8,
    pub participation_score: u8,
    pub overall_engagement: u8,
    pub comprehension_score: u8,
    pub teacher_effectiveness: u8,
    pub pace_score: u8,
    pub class_metrics: ClassMetrics,
}

impl ScoreSet {
    /// The fixed substitute set used when an external fetch fails.
    ///
    /// Deliberately a constant rather than the stale previous snapshot,
    /// so a plateau at these values is distinguishable from real data.
    pub fn fallback() -> Self {
        Self {
            attention_score: 78,
            emotion_score: 82,
            participation_score: 75,
            overall_engagement: 79,
            comprehension_score: 85,
            teacher_effectiveness: 81,
            pace_score: 88,
            class_metrics: ClassMetrics {
                engagement_rate: 79,
                participation_rate: 85,
                attention_consistency: 77,
            },
        }
    }

    /// Scores paired with their kinds, in enumeration order.
    pub fn named_scores(&self) -> [(ScoreKind, u8); 7] {
        [
            (ScoreKind::Attention, self.attention_score),
            (ScoreKind::Emotion, self.emotion_score),
            (ScoreKind::Participation, self.participation_score),
            (ScoreKind::OverallEngagement, self.overall_engagement),
            (ScoreKind::Comprehension, self.comprehension_score),
            (ScoreKind::TeacherEffectiveness, self.teacher_effectiveness),
            (ScoreKind::Pace, self.pace_score),
        ]
    }

    /// Lookup a single score by kind.
    pub fn get(&self, kind: ScoreKind) -> u8 {
        match kind {
            ScoreKind::Attention => self.attention_score,
            ScoreKind::Emotion => self.emotion_score,
            ScoreKind::Participation => self.participation_score,
            ScoreKind::OverallEngagement => self.overall_engagement,
            ScoreKind::Comprehension => self.comprehension_score,
            ScoreKind::TeacherEffectiveness => self.teacher_effectiveness,
            ScoreKind::Pace => self.pace_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_scores_order_matches_all() {
        let set = ScoreSet::fallback();
        for ((kind, _), expected) in set.named_scores().iter().zip(ScoreKind::ALL.iter()) {
            assert_eq!(kind, expected);
        }
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(ScoreKind::OverallEngagement.to_string(), "overall_engagement");
        assert_eq!(ScoreKind::Attention.to_string(), "attention_score");
        assert_eq!(ScoreKind::Pace.to_string(), "pace_score");
    }

    #[test]
    fn fallback_scores_in_range() {
        let set = ScoreSet::fallback();
        for (_, score) in set.named_scores() {
            assert!(score <= 100);
        }
    }

    #[test]
    fn serde_round_trip_preserves_field_names() {
        let set = ScoreSet::fallback();
        let json = serde_json::to_value(set).unwrap();
        assert_eq!(json["attention_score"], 78);
        assert_eq!(json["class_metrics"]["engagement_rate"], 79);
    }
}
