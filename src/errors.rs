//! Centralized error handling for vector_stats
//!
//! Every failure in the crate is surfaced through [`VectorStatsError`]; nothing is
//! only printed or logged and then swallowed.

use std::fmt;

/// Main error type for vector_stats operations
#[derive(Debug)]
pub enum VectorStatsError {
    /// Requested buffer length was zero
    InvalidSize { requested: usize },

    /// Buffer contents were read before any fill or import succeeded
    UninitializedAccess,

    /// Import source ran out of tokens before the buffer was full
    InsufficientData { expected: usize, found: usize },

    /// Import source could not be opened or read
    SourceUnavailable(std::io::Error),

    /// Export sink could not be opened or written
    SinkUnavailable(std::io::Error),

    /// Partitioned reduction requested with fewer than one worker
    InvalidWorkerCount { requested: usize },

    /// Random fill bounds do not describe a usable interval
    InvalidRange { min: String, max: String },

    /// Import token is not a valid scalar
    ParseError { index: usize, token: String },

    /// NaN values cannot be stored (they have no place in the min/max ordering)
    NotANumber { index: usize },

    /// Element count cannot be represented in the buffer's scalar type
    ScalarConversion { count: usize },

    /// Thread pool configuration error
    ThreadPoolError(String),
}

impl fmt::Display for VectorStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorStatsError::InvalidSize { requested } => {
                write!(f, "Invalid buffer size {}: size must be positive", requested)
            }
            VectorStatsError::UninitializedAccess => {
                write!(f, "Buffer is not initialized")
            }
            VectorStatsError::InsufficientData { expected, found } => write!(
                f,
                "Insufficient data: expected {} values, found {}",
                expected, found
            ),
            VectorStatsError::SourceUnavailable(e) => write!(f, "Import source unavailable: {}", e),
            VectorStatsError::SinkUnavailable(e) => write!(f, "Export sink unavailable: {}", e),
            VectorStatsError::InvalidWorkerCount { requested } => {
                write!(f, "Invalid worker count {}: at least one worker is required", requested)
            }
            VectorStatsError::InvalidRange { min, max } => {
                write!(f, "Invalid random range [{}, {}]", min, max)
            }
            VectorStatsError::ParseError { index, token } => {
                write!(f, "Cannot parse value '{}' at position {}", token, index)
            }
            VectorStatsError::NotANumber { index } => {
                write!(f, "NaN value at position {} is not allowed", index)
            }
            VectorStatsError::ScalarConversion { count } => {
                write!(f, "Element count {} does not fit the scalar type", count)
            }
            VectorStatsError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
        }
    }
}

impl std::error::Error for VectorStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VectorStatsError::SourceUnavailable(e) => Some(e),
            VectorStatsError::SinkUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for vector_stats operations
pub type Result<T> = std::result::Result<T, VectorStatsError>;
