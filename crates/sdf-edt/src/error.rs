//! Error types for distance-transform operations.

use thiserror::Error;

/// Error type for distance-transform operations.
#[derive(Error, Debug)]
pub enum EdtError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffer length does not match the stated dimensions.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Error from the core field types (allocation, construction).
    #[error(transparent)]
    Core(#[from] sdf_core::Error),
}

/// Result type for distance-transform operations.
pub type EdtResult<T> = Result<T, EdtError>;
