//! Error types for spotcheck operations

use thiserror::Error;

/// Result type alias for spotcheck operations
pub type Result<T> = std::result::Result<T, SpotcheckError>;

/// Main error type for spotcheck operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpotcheckError {
    #[error("Slice out of range: start {start}, end {end}, length {length}")]
    OutOfRange {
        start: usize,
        end: usize,
        length: usize,
    },

    #[error("Invalid step: range step must be nonzero")]
    InvalidStep,
}
