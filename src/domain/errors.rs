// ============================================================================
// Domain Errors
// Error types for record construction
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordError {
    /// Score outside the inclusive range [0.0, 4.0] (NaN included)
    ScoreOutOfRange { score: f64 },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::ScoreOutOfRange { score } => {
                write!(f, "GPA is out of range: {} is not within [0.0, 4.0]", score)
            },
        }
    }
}

impl std::error::Error for RecordError {}

/// Result type alias for record construction
pub type RecordResult<T> = Result<T, RecordError>;
