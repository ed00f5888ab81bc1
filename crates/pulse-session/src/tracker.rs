//! Delta detection over successive score snapshots.
//!
//! Two states: Idle (no snapshot yet) and Tracking (exactly one prior
//! snapshot, most-recent-wins). The snapshot is replaced on every
//! observation whether or not any alert fired.

use pulse_core::{AlertDirection, ScoreAlert, ScoreSet};

/// Percentage-change tracker for one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    previous: Option<ScoreSet>,
    threshold_pct: f64,
}

impl ScoreTracker {
    /// Tracker with the given alert threshold (inclusive), in percent.
    pub fn new(threshold_pct: f64) -> Self {
        Self {
            previous: None,
            threshold_pct,
        }
    }

    /// Whether a prior snapshot is held.
    pub fn is_tracking(&self) -> bool {
        self.previous.is_some()
    }

    /// The held snapshot, if any.
    pub fn snapshot(&self) -> Option<&ScoreSet> {
        self.previous.as_ref()
    }

    /// Observe a new score set and return the qualifying alerts.
    ///
    /// The first observation stores the snapshot and emits nothing.
    /// Afterwards, each score is compared in `named_scores()` order; a
    /// score whose previous value is 0 is skipped (no signal, avoids the
    /// zero division). At most one alert per score per cycle, in
    /// enumeration order, never re-ordered by magnitude.
    pub fn observe(&mut self, current: ScoreSet) -> Vec<ScoreAlert> {
        let alerts = match &self.previous {
            None => Vec::new(),
            Some(previous) => {
                let mut alerts = Vec::new();
                for ((kind, now), (_, before)) in
                    current.named_scores().iter().zip(previous.named_scores())
                {
                    if before == 0 {
                        continue;
                    }
                    let change_pct =
                        (*now as f64 - before as f64) / before as f64 * 100.0;
                    if change_pct.abs() >= self.threshold_pct {
                        let direction = if change_pct < 0.0 {
                            AlertDirection::Drop
                        } else {
                            AlertDirection::Increase
                        };
                        alerts.push(ScoreAlert {
                            kind: *kind,
                            value: *now,
                            direction,
                            change_pct: change_pct.abs(),
                        });
                    }
                }
                alerts
            }
        };
        self.previous = Some(current);
        alerts
    }

    /// Drop the held snapshot, returning to Idle.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
