//! Value types shared across the workspace.

pub mod collections;
pub mod metrics;
pub mod scores;
pub mod weights;
