/// Convenience result type used across Cueline.
pub type CuelineResult<T> = Result<T, CuelineError>;

/// Top-level error taxonomy used by the timeline engine.
#[derive(thiserror::Error, Debug)]
pub enum CuelineError {
    /// Invalid caller-provided data (breakpoint sequences, fps, fade windows).
    #[error("validation error: {0}")]
    Validation(String),

    /// A segment that cannot be laid out (non-positive duration).
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// A zero-width input interval in a breakpoint sequence.
    #[error("degenerate range: {0}")]
    DegenerateRange(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CuelineError {
    /// Build a [`CuelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CuelineError::InvalidSegment`] value.
    pub fn invalid_segment(msg: impl Into<String>) -> Self {
        Self::InvalidSegment(msg.into())
    }

    /// Build a [`CuelineError::DegenerateRange`] value.
    pub fn degenerate_range(msg: impl Into<String>) -> Self {
        Self::DegenerateRange(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
