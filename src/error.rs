//! Error handling for leetdict

use thiserror::Error;

/// Errors raised by the generation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeetError {
    #[error("Invalid window: end ({end}) must be greater than start ({start})")]
    InvalidWindow { start: u128, end: u128 },

    #[error("Count overflow: {what} does not fit in 128 bits")]
    CountOverflow { what: String },
}

impl LeetError {
    /// Create an invalid window error
    pub fn invalid_window(start: u128, end: u128) -> Self {
        Self::InvalidWindow { start, end }
    }

    /// Create a count overflow error
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::CountOverflow { what: what.into() }
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, LeetError>;
