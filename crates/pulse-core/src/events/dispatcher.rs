//! Best-effort alert dispatch to an optional narration collaborator.
//! Events are dropped silently when no sink is attached or the sink is
//! disabled; nothing is queued or retried.

use std::sync::Arc;

use crate::types::scores::ScoreSet;

use super::alert::ScoreAlert;

/// Seam for the voice/narration collaborator.
pub trait NarrationSink: Send + Sync {
    /// A qualifying score change occurred.
    fn on_alert(&self, alert: &ScoreAlert);

    /// A full evaluation cycle completed with these scores.
    fn on_scores(&self, _scores: &ScoreSet) {}
}

/// Dispatcher holding an optional narration sink.
#[derive(Clone, Default)]
pub struct AlertDispatcher {
    sink: Option<Arc<dyn NarrationSink>>,
    enabled: bool,
}

impl AlertDispatcher {
    /// A dispatcher with no sink; all events are dropped.
    pub fn detached() -> Self {
        Self {
            sink: None,
            enabled: false,
        }
    }

    /// A dispatcher delivering to the given sink.
    pub fn with_sink(sink: Arc<dyn NarrationSink>) -> Self {
        Self {
            sink: Some(sink),
            enabled: true,
        }
    }

    /// Enable or disable delivery without detaching the sink.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled && self.sink.is_some()
    }

    /// Deliver one alert. No-op when disabled or detached.
    pub fn dispatch_alert(&self, alert: &ScoreAlert) {
        if !self.enabled {
            return;
        }
        if let Some(sink) = &self.sink {
            tracing::debug!(
                score = %alert.kind,
                direction = %alert.direction,
                change_pct = alert.change_pct,
                "dispatching score alert"
            );
            sink.on_alert(alert);
        }
    }

    /// Deliver a completed score set. No-op when disabled or detached.
    pub fn dispatch_scores(&self, scores: &ScoreSet) {
        if !self.enabled {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.on_scores(scores);
        }
    }
}
