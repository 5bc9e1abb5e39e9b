//! The [`Field`] grid container.
//!
//! A `Field` is an owned, row-major, single-channel `f32` buffer with
//! validated dimensions. It is the unit of work for the distance transform:
//! seed heights in, distances out, mutated in place.
//!
//! # Memory Layout
//!
//! Values are stored row-major, top-to-bottom:
//!
//! ```text
//! Memory: [v v v v ...]  <- Row 0
//!         [v v v v ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use sdf_core::Field;
//!
//! // 8x4 field, infinite everywhere, one seed at (3, 2)
//! let mut field = Field::filled(8, 4, f32::INFINITY).unwrap();
//! field.set(3, 2, 0.0);
//! assert_eq!(field.get(3, 2), 0.0);
//! ```

use crate::{Error, Result};

/// Owned width x height grid of `f32`, row-major.
///
/// Construction validates that both dimensions are positive and that
/// `width * height` does not overflow. Allocation failure is reported as
/// [`Error::AllocationFailed`] rather than aborting, so callers working
/// with very large fields can recover.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Scalar data, `width * height` values.
    data: Vec<f32>,
    /// Width in pixels.
    width: usize,
    /// Height in pixels.
    height: usize,
}

impl Field {
    /// Creates a field filled with zeros.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if either dimension is zero or the
    /// element count overflows; [`Error::AllocationFailed`] if the buffer
    /// cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, 0.0)
    }

    /// Creates a field filled with `value`.
    ///
    /// `Field::filled(w, h, f32::INFINITY)` is the usual starting point for
    /// a seed-height grid.
    pub fn filled(width: usize, height: usize, value: f32) -> Result<Self> {
        let len = checked_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| {
            Error::allocation_failed(
                len.saturating_mul(std::mem::size_of::<f32>()),
                "field buffer reservation failed",
            )
        })?;
        data.resize(len, value);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a field from an existing buffer.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `data.len() != width * height`,
    /// [`Error::InvalidDimensions`] if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sdf_core::Field;
    ///
    /// let field = Field::from_vec(vec![0.0; 12], 4, 3).unwrap();
    /// assert_eq!(field.width(), 4);
    /// assert!(Field::from_vec(vec![0.0; 12], 5, 3).is_err());
    /// ```
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> Result<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::dimension_mismatch(data.len(), width, height));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of values (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: construction rejects zero dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat index of `(x, y)`.
    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Value at `(x, y)`.
    ///
    /// Panics in debug builds if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    /// Sets the value at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }

    /// The whole buffer as a slice, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The whole buffer as a mutable slice, row-major.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the field, returning the underlying buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Iterator over rows as `&[f32]` slices of length `width`.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.width)
    }

    /// Iterator over rows as mutable slices of length `width`.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.data.chunks_exact_mut(self.width)
    }
}

/// Validates dimensions and returns the element count.
fn checked_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "dimensions must be positive",
        ));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "element count overflows"))
}
