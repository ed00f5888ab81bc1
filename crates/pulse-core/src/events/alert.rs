//! Structured score-change events. Formatting narration text is the
//! voice collaborator's concern; the engine only emits these records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::scores::ScoreKind;

/// Direction of a qualifying score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertDirection {
    Drop,
    Increase,
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertDirection::Drop => write!(f, "drop"),
            AlertDirection::Increase => write!(f, "increase"),
        }
    }
}

/// A score change at or above the alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreAlert {
    /// Which score changed.
    pub kind: ScoreKind,
    /// The new value.
    pub value: u8,
    /// Drop or increase.
    pub direction: AlertDirection,
    /// Magnitude of the percentage change since the previous snapshot.
    pub change_pct: f64,
}
