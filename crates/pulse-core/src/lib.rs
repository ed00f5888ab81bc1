//! # pulse-core
//!
//! Foundation crate for the Pulse engagement engine.
//! Defines the metric and score types, weight profiles, config, errors,
//! and alert events. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{PulseConfig, ScoringConfig, SessionConfig};
pub use errors::SourceError;
pub use events::{AlertDirection, AlertDispatcher, NarrationSink, ScoreAlert};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::metrics::{AudioMetrics, ExamRecord, LiveMetrics, RawMetrics};
pub use types::scores::{ClassMetrics, ScoreKind, ScoreSet};
pub use types::weights::{EffectivenessWeights, EngagementWeights, SourceWeights};
