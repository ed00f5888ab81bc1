//! # pulse-scoring
//!
//! The pure scoring engine: converts raw session metrics into normalized
//! 0-100 scores and weighted composites. No I/O, no state across calls;
//! every calculator tolerates zero and out-of-range inputs.

pub mod adjust;
pub mod calculators;
pub mod composite;
pub mod engine;
pub mod exam;
pub mod insights;
pub mod normalize;

pub use engine::ScoringEngine;
pub use exam::ExamSummary;
