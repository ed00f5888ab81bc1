//! Alert events and the narration sink seam.

mod alert;
mod dispatcher;

pub use alert::{AlertDirection, ScoreAlert};
pub use dispatcher::{AlertDispatcher, NarrationSink};
