//! Error types. Arithmetic edge cases in scoring are never errors; the
//! only failures this subsystem reports come from external collaborators.

/// Metric source errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("metric request failed: {0}")]
    RequestFailed(String),

    #[error("metric response could not be decoded: {0}")]
    DecodeFailed(String),

    #[error("metric source unavailable: {0}")]
    Unavailable(String),
}
