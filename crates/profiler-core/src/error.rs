//! Error types for the profiler workspace
//!
//! Provides a unified error type shared by all profiler crates.

use thiserror::Error;

/// Core error type for profiling operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid construction parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A field name that the schema does not declare
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a construction parameter below its minimum
    pub fn parameter_too_small(name: &str, minimum: usize, actual: usize) -> Self {
        Self::InvalidParameter(format!("{name} must be at least {minimum}, got {actual}"))
    }
}
