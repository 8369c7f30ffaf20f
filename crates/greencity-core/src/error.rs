//! Error types for GreenCity

use thiserror::Error;

/// Main error type for optimizer operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GreenCityError {
    /// The requested budget cannot be optimized against
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    /// The DP tables for the requested capacity would exceed the configured ceiling
    #[error("Capacity limit exceeded: tables need {required} bytes, limit is {limit} bytes")]
    CapacityLimit {
        /// Bytes the tables would occupy (saturated at `u64::MAX`).
        required: u64,
        /// Configured ceiling in bytes.
        limit: u64,
    },
}

/// Result type alias for GreenCity operations
pub type Result<T> = std::result::Result<T, GreenCityError>;
