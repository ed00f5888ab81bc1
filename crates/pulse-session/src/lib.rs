//! # pulse-session
//!
//! The stateful session layer around the scoring engine: one
//! `DashboardSession` per dashboard, owning its own score history,
//! metric source, and alert dispatch. No process-wide singletons.

pub mod session;
pub mod source;
pub mod tracker;

pub use session::{CycleReport, DashboardSession};
pub use source::{HttpMetricsSource, MetricsSource, SimulatedMetricsSource};
pub use tracker::ScoreTracker;
