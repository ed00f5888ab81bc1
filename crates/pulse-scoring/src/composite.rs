//! Multi-source blended scores: exam, video, and audio components
//! combined under a `SourceWeights` profile. This is the coarser scoring
//! path used when per-event counters are unavailable and only aggregate
//! signals exist.

use pulse_core::{AudioMetrics, ClassMetrics, LiveMetrics, ScoreSet, SourceWeights};

use crate::calculators::effectiveness;
use crate::exam::ExamSummary;
use crate::normalize::{clamp_score, round_score};

/// Attention: exam performance (damped), video attention, speech clarity.
pub fn attention(w: &SourceWeights, exam: &ExamSummary, video: &LiveMetrics, audio: &AudioMetrics) -> f64 {
    clamp_score(w.combine(
        exam.average_performance * 0.8,
        video.attention,
        audio.speech_clarity,
    ))
}

/// Emotion: pass rate, video engagement, volume consistency.
pub fn emotion(w: &SourceWeights, exam: &ExamSummary, video: &LiveMetrics, audio: &AudioMetrics) -> f64 {
    clamp_score(w.combine(exam.pass_rate, video.engagement, audio.volume_consistency))
}

/// Participation: excellence rate (doubled), hand raises, question
/// frequency — each scaled onto a rough percentage before blending.
pub fn participation(w: &SourceWeights, exam: &ExamSummary, video: &LiveMetrics, audio: &AudioMetrics) -> f64 {
    clamp_score(w.combine(
        exam.excellence_rate * 2.0,
        video.hand_raises as f64 * 10.0,
        audio.question_frequency * 5.0,
    ))
}

/// Engagement over the three blended sub-scores, 0.40/0.35/0.25.
pub fn engagement(w: &SourceWeights, exam: &ExamSummary, video: &LiveMetrics, audio: &AudioMetrics) -> f64 {
    let attention = attention(w, exam, video, audio);
    let emotion = emotion(w, exam, video, audio);
    let participation = participation(w, exam, video, audio);
    clamp_score(attention * 0.40 + emotion * 0.35 + participation * 0.25)
}

/// Comprehension: exam average dominates (0.60/0.25/0.15).
pub fn comprehension(exam: &ExamSummary, video: &LiveMetrics, audio: &AudioMetrics) -> f64 {
    clamp_score(
        exam.average_performance * 0.60 + video.attention * 0.25 + audio.pace_score * 0.15,
    )
}

/// Effectiveness: pass/excellence midpoint, video engagement, and the
/// clarity/pace midpoint.
pub fn teacher_effectiveness(
    w: &SourceWeights,
    exam: &ExamSummary,
    video: &LiveMetrics,
    audio: &AudioMetrics,
) -> f64 {
    clamp_score(w.combine(
        (exam.pass_rate + exam.excellence_rate) / 2.0,
        video.engagement,
        (audio.speech_clarity + audio.pace_score) / 2.0,
    ))
}

/// Full blended score set. Class metrics are derived from the aggregate
/// signals: engagement and attention stand in for the per-student rates,
/// and the sample set is too small for a meaningful variance, so
/// consistency reads from the single engagement figure.
pub fn score_set(
    w: &SourceWeights,
    exam: &ExamSummary,
    video: &LiveMetrics,
    audio: &AudioMetrics,
) -> ScoreSet {
    let samples = [video.attention, video.engagement];
    ScoreSet {
        attention_score: round_score(attention(w, exam, video, audio)),
        emotion_score: round_score(emotion(w, exam, video, audio)),
        participation_score: round_score(participation(w, exam, video, audio)),
        overall_engagement: round_score(engagement(w, exam, video, audio)),
        comprehension_score: round_score(comprehension(exam, video, audio)),
        teacher_effectiveness: round_score(teacher_effectiveness(w, exam, video, audio)),
        pace_score: round_score(audio.pace_score),
        class_metrics: ClassMetrics {
            engagement_rate: round_score(video.engagement),
            participation_rate: round_score(video.attention),
            attention_consistency: round_score(effectiveness::attention_consistency(&samples)),
        },
    }
}
