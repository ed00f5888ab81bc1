//! Raw metric input types. All values arrive from external collaborators
//! and are untrusted: zero, missing, and out-of-range inputs are legal.

use serde::{Deserialize, Serialize};

/// Wire shape of `GET /live-metrics` from the video-analysis collaborator.
///
/// Missing fields substitute neutral defaults so a partial payload never
/// fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveMetrics {
    /// Attention signal as a percentage.
    pub attention: f64,
    /// Engagement signal as a percentage.
    pub engagement: f64,
    /// Count of participating students this window, when reported.
    pub participation: Option<u32>,
    /// Hand raises observed this window.
    pub hand_raises: u32,
    /// Students visible in frame.
    pub students: u32,
}

impl Default for LiveMetrics {
    fn default() -> Self {
        Self {
            attention: 75.0,
            engagement: 75.0,
            participation: None,
            hand_raises: 3,
            students: 30,
        }
    }
}

impl LiveMetrics {
    /// Correct-answer proxy: reported participation count, else the
    /// visible student count.
    pub fn correct_answers(&self) -> u32 {
        self.participation.unwrap_or(self.students)
    }
}

/// Audio-analysis signals. The upstream analyzer is stubbed, so these
/// arrive in bounded percentage ranges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AudioMetrics {
    /// Speech clarity percentage, typically 70-100.
    pub speech_clarity: f64,
    /// Pace percentage, typically 75-100.
    pub pace_score: f64,
    /// Volume consistency percentage, typically 80-100.
    pub volume_consistency: f64,
    /// Questions asked per hour, typically 5-15.
    pub question_frequency: f64,
}

/// One exam result row: `(student_id, subject, ..., percentage)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub student_id: String,
    pub subject: String,
    pub percentage: f64,
}

/// The unified scoring input for one evaluation cycle. Constructed fresh
/// each cycle; never stored across cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMetrics {
    /// Seconds of measured attention within the session.
    pub attention_duration_secs: f64,
    /// Total session length in seconds. Zero yields an attention score of 0.
    pub session_duration_secs: f64,
    /// Measurement confidence from the upstream estimator, in (0,1].
    pub confidence_factor: f64,

    /// Positive emotional signal (count or percentage points).
    pub positive_signal: f64,
    /// Negative emotional signal, same unit as `positive_signal`.
    pub negative_signal: f64,
    /// Total emotional signal. Zero yields the neutral emotion score of 50.
    pub total_signal: f64,

    /// Hand raises this session.
    pub hand_raises: u32,
    /// Correct answers among `total_responses`.
    pub correct_answers: u32,
    /// Total responses given. Zero drops the accuracy component.
    pub total_responses: u32,
    /// Seconds of active participation.
    pub participation_secs: f64,
    /// Class window length in seconds for the time component.
    pub class_duration_secs: f64,

    /// External interaction signal (raw engagement sensor reading).
    pub interaction_signal: f64,

    /// Correct responses to comprehension checks.
    pub comprehension_correct: u32,
    /// Comprehension questions asked. Zero yields a comprehension score of 0.
    pub comprehension_total: u32,
    /// Confusion indicators observed (furrowed brows, re-asks, ...).
    pub confusion_indicators: u32,
    /// Mean response latency in seconds.
    pub avg_response_time_secs: f64,

    /// Words spoken by the teacher.
    pub words_spoken: f64,
    /// Speech duration in minutes. Zero yields a pace score of 0.
    pub speech_duration_mins: f64,

    /// Per-student engagement samples for the consistency computation.
    pub student_engagements: Vec<f64>,
    /// Students actively participating.
    pub active_participants: u32,
    /// Total students enrolled. Zero drops the participation rate.
    pub total_students: u32,
}

impl Default for RawMetrics {
    fn default() -> Self {
        Self {
            attention_duration_secs: 0.0,
            session_duration_secs: 0.0,
            confidence_factor: 0.92,
            positive_signal: 0.0,
            negative_signal: 0.0,
            total_signal: 0.0,
            hand_raises: 0,
            correct_answers: 0,
            total_responses: 0,
            participation_secs: 0.0,
            class_duration_secs: 0.0,
            interaction_signal: 0.0,
            comprehension_correct: 0,
            comprehension_total: 0,
            confusion_indicators: 0,
            avg_response_time_secs: 0.0,
            words_spoken: 0.0,
            speech_duration_mins: 0.0,
            student_engagements: Vec::new(),
            active_participants: 0,
            total_students: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_metrics_missing_fields_get_neutral_defaults() {
        let metrics: LiveMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(metrics.attention, 75.0);
        assert_eq!(metrics.engagement, 75.0);
        assert_eq!(metrics.hand_raises, 3);
        assert_eq!(metrics.students, 30);
        assert!(metrics.participation.is_none());
    }

    #[test]
    fn live_metrics_partial_payload() {
        let metrics: LiveMetrics =
            serde_json::from_str(r#"{"attention": 62.5, "hand_raises": 7}"#).unwrap();
        assert_eq!(metrics.attention, 62.5);
        assert_eq!(metrics.hand_raises, 7);
        assert_eq!(metrics.engagement, 75.0);
    }

    #[test]
    fn correct_answers_prefers_participation_count() {
        let mut metrics = LiveMetrics::default();
        assert_eq!(metrics.correct_answers(), 30);
        metrics.participation = Some(12);
        assert_eq!(metrics.correct_answers(), 12);
    }
}
