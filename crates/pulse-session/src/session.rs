//! One dashboard session: the evaluation loop tying source, engine,
//! tracker, and dispatcher together.
//!
//! Cycles are single-flight. Each cycle runs to completion (fetch,
//! score, diff, dispatch) before the next timer tick is honored; a slow
//! fetch delays the following cycle rather than overlapping it.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use pulse_core::{
    AlertDispatcher, AudioMetrics, LiveMetrics, NarrationSink, PulseConfig, RawMetrics,
    ScoreAlert, ScoreSet, SessionConfig,
};
use pulse_scoring::ScoringEngine;

use crate::source::MetricsSource;
use crate::tracker::ScoreTracker;

/// Outcome of one evaluation cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// The scores published this cycle.
    pub scores: ScoreSet,
    /// Qualifying deltas against the previous cycle, in score order.
    pub alerts: Vec<ScoreAlert>,
    /// True when the source failed and the fallback set was published.
    pub degraded: bool,
}

/// A live dashboard session over one metric source.
///
/// Owns all per-dashboard state; two sessions never share a tracker or
/// dispatcher.
pub struct DashboardSession<S: MetricsSource> {
    source: S,
    engine: ScoringEngine,
    tracker: ScoreTracker,
    dispatcher: AlertDispatcher,
    session_config: SessionConfig,
    confidence_factor: f64,
    latest: Option<ScoreSet>,
}

impl<S: MetricsSource> DashboardSession<S> {
    /// Session with no narration sink attached.
    pub fn new(source: S, config: PulseConfig) -> Self {
        let confidence_factor = config.scoring.effective_confidence_factor();
        let tracker = ScoreTracker::new(config.session.effective_delta_threshold_pct());
        Self {
            source,
            engine: ScoringEngine::new(config.scoring),
            tracker,
            dispatcher: AlertDispatcher::detached(),
            session_config: config.session,
            confidence_factor,
            latest: None,
        }
    }

    /// Attach a narration sink for alert delivery.
    pub fn with_sink(mut self, sink: Arc<dyn NarrationSink>) -> Self {
        self.dispatcher = AlertDispatcher::with_sink(sink);
        self
    }

    /// Enable or disable alert delivery without detaching the sink.
    pub fn set_alerts_enabled(&mut self, enabled: bool) {
        self.dispatcher.set_enabled(enabled);
    }

    /// Most recently published scores, if a cycle has run.
    pub fn latest_scores(&self) -> Option<&ScoreSet> {
        self.latest.as_ref()
    }

    /// Run one evaluation cycle to completion.
    ///
    /// On any source failure the full fallback score set is published in
    /// place of computed scores; the cycle still diffs and dispatches, so
    /// a recovery on the next cycle produces sensible deltas.
    pub async fn evaluate_once(&mut self) -> CycleReport {
        let fetched = self.fetch_signals().await;
        let (scores, degraded) = match fetched {
            Ok((live, audio)) => {
                let raw = self.raw_from_signals(&live, &audio);
                (self.engine.evaluate(&raw), false)
            }
            Err(error) => {
                tracing::warn!(%error, "metric fetch failed; publishing fallback scores");
                (ScoreSet::fallback(), true)
            }
        };

        self.publish(scores, degraded)
    }

    /// Run one aggregate cycle blending exam, video, and audio signals.
    ///
    /// Same failure policy as [`evaluate_once`](Self::evaluate_once): any
    /// source error publishes the fallback set wholesale.
    pub async fn evaluate_blended_once(&mut self) -> CycleReport {
        let fetched = async {
            let live = self.source.live_metrics().await?;
            let audio = self.source.audio_metrics().await?;
            let records = self.source.exam_records().await?;
            Ok::<_, pulse_core::SourceError>((live, audio, records))
        }
        .await;

        let (scores, degraded) = match fetched {
            Ok((live, audio, records)) => {
                let summary = pulse_scoring::exam::summarize(
                    &records,
                    self.engine.config().effective_pass_threshold(),
                    self.engine.config().effective_excellence_threshold(),
                );
                (self.engine.evaluate_blended(&summary, &live, &audio), false)
            }
            Err(error) => {
                tracing::warn!(%error, "metric fetch failed; publishing fallback scores");
                (ScoreSet::fallback(), true)
            }
        };

        self.publish(scores, degraded)
    }

    fn publish(&mut self, scores: ScoreSet, degraded: bool) -> CycleReport {
        let alerts = self.tracker.observe(scores);
        for alert in &alerts {
            self.dispatcher.dispatch_alert(alert);
        }
        self.dispatcher.dispatch_scores(&scores);

        tracing::info!(
            overall = scores.overall_engagement,
            attention = scores.attention_score,
            alerts = alerts.len(),
            degraded,
            "evaluation cycle complete"
        );

        self.latest = Some(scores);
        CycleReport {
            scores,
            alerts,
            degraded,
        }
    }

    /// Run the evaluation loop until the task is dropped.
    ///
    /// Ticks at the configured poll interval; missed ticks are delayed,
    /// never bunched, so cycles stay single-flight under load.
    pub async fn run(&mut self) {
        let period = Duration::from_secs(self.session_config.effective_poll_interval_secs());
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.evaluate_once().await;
        }
    }

    async fn fetch_signals(
        &self,
    ) -> Result<(LiveMetrics, AudioMetrics), pulse_core::SourceError> {
        let live = self.source.live_metrics().await?;
        let audio = self.source.audio_metrics().await?;
        Ok((live, audio))
    }

    /// Expand the wire signals into one scoring snapshot.
    ///
    /// The video collaborator reports percentages, not durations, so the
    /// duration-based inputs are reconstructed against the configured
    /// session and participation windows.
    fn raw_from_signals(&self, live: &LiveMetrics, audio: &AudioMetrics) -> RawMetrics {
        let session_secs = self.session_config.effective_session_duration_secs();
        let window_secs = self.session_config.effective_participation_window_secs();
        let speech_mins = session_secs / 60.0;
        RawMetrics {
            attention_duration_secs: live.attention / 100.0 * session_secs,
            session_duration_secs: session_secs,
            confidence_factor: self.confidence_factor,
            positive_signal: live.engagement,
            negative_signal: 100.0 - live.engagement,
            total_signal: 100.0,
            hand_raises: live.hand_raises,
            correct_answers: live.correct_answers(),
            total_responses: live.students,
            participation_secs: live.engagement / 100.0 * window_secs,
            class_duration_secs: window_secs,
            interaction_signal: live.engagement,
            comprehension_correct: live.correct_answers(),
            comprehension_total: live.students,
            confusion_indicators: 0,
            avg_response_time_secs: 5.0,
            // Pace arrives as a percentage of the optimal 160 wpm ceiling.
            words_spoken: audio.pace_score / 100.0 * 160.0 * speech_mins,
            speech_duration_mins: speech_mins,
            student_engagements: vec![live.attention, live.engagement],
            active_participants: live.correct_answers().min(live.students),
            total_students: live.students,
        }
    }
}
