//! Criterion benchmarks for the hot scoring path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pulse_core::{AudioMetrics, LiveMetrics, RawMetrics};
use pulse_scoring::{ExamSummary, ScoringEngine};

fn sample_metrics() -> RawMetrics {
    RawMetrics {
        attention_duration_secs: 2400.0,
        session_duration_secs: 3000.0,
        confidence_factor: 0.92,
        positive_signal: 80.0,
        negative_signal: 20.0,
        total_signal: 100.0,
        hand_raises: 4,
        correct_answers: 12,
        total_responses: 15,
        participation_secs: 1800.0,
        class_duration_secs: 3000.0,
        interaction_signal: 78.0,
        comprehension_correct: 18,
        comprehension_total: 20,
        confusion_indicators: 2,
        avg_response_time_secs: 6.0,
        words_spoken: 7200.0,
        speech_duration_mins: 50.0,
        student_engagements: (0..30).map(|i| 60.0 + (i % 30) as f64).collect(),
        active_participants: 28,
        total_students: 30,
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let engine = ScoringEngine::default();
    let metrics = sample_metrics();
    c.bench_function("evaluate_raw_metrics", |b| {
        b.iter(|| engine.evaluate(black_box(&metrics)))
    });
}

fn bench_evaluate_blended(c: &mut Criterion) {
    let engine = ScoringEngine::default();
    let exam = ExamSummary {
        average_performance: 75.0,
        pass_rate: 80.0,
        excellence_rate: 15.0,
    };
    let video = LiveMetrics::default();
    let audio = AudioMetrics {
        speech_clarity: 88.0,
        pace_score: 90.0,
        volume_consistency: 85.0,
        question_frequency: 9.0,
    };
    c.bench_function("evaluate_blended", |b| {
        b.iter(|| engine.evaluate_blended(black_box(&exam), black_box(&video), black_box(&audio)))
    });
}

criterion_group!(benches, bench_evaluate, bench_evaluate_blended);
criterion_main!(benches);
