//! 2D Euclidean distance transform.
//!
//! The 2D squared distance `min_p (dx^2 + dy^2 + cost[p])` separates into a
//! 1D pass along rows followed by a 1D pass along columns: after the row
//! pass each pixel holds the exact row-wise partial minimum, and the column
//! pass minimizes `dy^2` over those partials. This is exact, not an
//! approximation.
//!
//! The column pass runs on a transposed copy so both passes stream rows
//! contiguously; the transpose back converts squared distance to true
//! Euclidean distance with an elementwise square root.
//!
//! # Example
//!
//! ```rust
//! use sdf_edt::transform;
//!
//! let inf = f32::INFINITY;
//! let mut grid = vec![inf; 9];
//! grid[4] = 0.0; // center of a 3x3 grid
//! transform(&mut grid, 3, 3).unwrap();
//!
//! assert_eq!(grid[4], 0.0);
//! assert_eq!(grid[1], 1.0);
//! assert_eq!(grid[0], 2.0f32.sqrt());
//! ```

use crate::envelope::{transform_row_with, Envelope};
use crate::{EdtError, EdtResult};
use sdf_core::{Error, Field};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// 2D Euclidean distance transform, in place.
///
/// `grid` is a row-major width x height buffer of seed heights (`0.0` at
/// seeds, `INFINITY` elsewhere; any finite value acts as a baseline cost).
/// On return it holds, for every pixel, the true (not squared) Euclidean
/// distance to the nearest seed. Pixels with no seed anywhere on the grid
/// remain infinite.
///
/// Rows and columns are transformed as independent data-parallel batches
/// when the `parallel` feature is enabled.
///
/// # Errors
///
/// - [`EdtError::InvalidDimensions`] if `width` or `height` is zero
/// - [`EdtError::SizeMismatch`] if `grid.len() != width * height`
/// - [`EdtError::Core`] if the transpose buffer cannot be allocated
pub fn transform(grid: &mut [f32], width: usize, height: usize) -> EdtResult<()> {
    validate(grid.len(), width, height)?;
    debug!(width, height, "euclidean distance transform");

    // Pass 1: rows.
    row_pass(grid, width);
    trace!("row pass complete");

    // Pass 2: columns, via a transposed height x width copy.
    let mut flipped = alloc_scratch(grid.len())?;
    transpose(grid, width, height, &mut flipped);
    row_pass(&mut flipped, height);
    trace!("column pass complete");

    // Transpose back, converting squared distance to Euclidean distance.
    transpose_sqrt(&flipped, height, width, grid);
    Ok(())
}

/// [`transform`] over a [`Field`].
///
/// # Example
///
/// ```rust
/// use sdf_core::Field;
/// use sdf_edt::transform_field;
///
/// let mut field = Field::filled(5, 5, f32::INFINITY).unwrap();
/// field.set(2, 2, 0.0);
/// transform_field(&mut field).unwrap();
/// assert_eq!(field.get(2, 4), 2.0);
/// ```
pub fn transform_field(field: &mut Field) -> EdtResult<()> {
    let (width, height) = (field.width(), field.height());
    transform(field.as_mut_slice(), width, height)
}

fn validate(len: usize, width: usize, height: usize) -> EdtResult<()> {
    if width == 0 || height == 0 {
        return Err(EdtError::InvalidDimensions(format!(
            "width and height must be positive, got {width}x{height}"
        )));
    }
    let expected = width.checked_mul(height).ok_or_else(|| {
        EdtError::InvalidDimensions(format!("{width}x{height} overflows element count"))
    })?;
    if len != expected {
        return Err(EdtError::SizeMismatch(format!(
            "expected {expected} values for {width}x{height}, got {len}"
        )));
    }
    Ok(())
}

/// Fallible scratch allocation for the transposed pass.
fn alloc_scratch(len: usize) -> EdtResult<Vec<f32>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| {
        EdtError::Core(Error::allocation_failed(
            len.saturating_mul(std::mem::size_of::<f32>()),
            "transpose buffer reservation failed",
        ))
    })?;
    buf.resize(len, 0.0);
    Ok(buf)
}

/// Transforms every row of `data` independently.
///
/// Each worker owns one envelope scratch, reused across the rows it
/// processes; rows partition the buffer disjointly so no synchronization
/// is needed beyond the implicit join.
#[cfg(feature = "parallel")]
fn row_pass(data: &mut [f32], width: usize) {
    data.par_chunks_mut(width)
        .for_each_init(|| Envelope::new(width), |env, row| transform_row_with(row, env));
}

#[cfg(not(feature = "parallel"))]
fn row_pass(data: &mut [f32], width: usize) {
    let mut env = Envelope::new(width);
    for row in data.chunks_exact_mut(width) {
        transform_row_with(row, &mut env);
    }
}

/// Transposes a width x height buffer into a height x width buffer.
fn transpose(src: &[f32], width: usize, height: usize, dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());
    for y in 0..height {
        for x in 0..width {
            dst[x * height + y] = src[y * width + x];
        }
    }
}

/// Transposes back and takes the square root of every value.
fn transpose_sqrt(src: &[f32], src_width: usize, src_height: usize, dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());
    for r in 0..src_height {
        for c in 0..src_width {
            dst[c * src_height + r] = src[r * src_width + c].sqrt();
        }
    }
}
