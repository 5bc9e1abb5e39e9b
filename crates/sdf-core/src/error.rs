//! Error types for sdf-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the distance-field
//! pipeline:
//!
//! - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions),
//!   [`DimensionMismatch`](Error::DimensionMismatch)
//! - **Allocation errors**: [`AllocationFailed`](Error::AllocationFailed)
//!
//! The distance transform itself is a closed-form numeric kernel with no
//! I/O, so the taxonomy is deliberately small: anything else (empty rows,
//! mismatched scratch lengths) is a programmer error and is enforced with
//! debug assertions at the call sites, not represented here.
//!
//! # Usage
//!
//! ```rust
//! use sdf_core::{Error, Result};
//!
//! fn check(width: usize, height: usize) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height, "must be positive"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or transforming fields.
///
/// Uses [`thiserror`] for the [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid field dimensions.
    ///
    /// Returned when width or height is zero, or dimensions would overflow
    /// the buffer size calculation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// Buffer length does not match the stated dimensions.
    ///
    /// Returned when constructing a field from an existing buffer whose
    /// length is not `width * height`.
    #[error("buffer length {len} does not match {width}x{height}")]
    DimensionMismatch {
        /// Provided buffer length
        len: usize,
        /// Stated width
        width: usize,
        /// Stated height
        height: usize,
    },

    /// Memory allocation failed.
    ///
    /// Returned when the system cannot allocate a field or transpose
    /// buffer. This is a resource condition, not a logic error, so it is
    /// reported rather than panicking.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
        /// Failure reason
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(len: usize, width: usize, height: usize) -> Self {
        Self::DimensionMismatch { len, width, height }
    }

    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a dimension-related error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}
