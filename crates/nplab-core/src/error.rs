//! Error types for nplab-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid origin: {0} (expected internal or external)")]
    InvalidOrigin(String),

    #[error("Invalid parity: {0} (expected even or odd)")]
    InvalidParity(String),

    #[error("Unknown sample type: {0}")]
    UnknownSampleType(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("At least one interval is required")]
    EmptyIntervals,
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
