//! Per-metric score calculators. Each is a pure function returning an
//! unrounded `f64` in [0,100]; the engine rounds once at the end.

pub mod attention;
pub mod comprehension;
pub mod effectiveness;
pub mod emotion;
pub mod engagement;
pub mod pace;
pub mod participation;

pub use effectiveness::EffectivenessBreakdown;
