//! Signed-field combination.
//!
//! Builds a signed distance field from a boolean inside/outside mask by
//! running the unsigned transform once per class and subtracting. How the
//! mask was produced (thresholding, channel selection) and how the signed
//! values are remapped for display are the caller's concern.

use crate::transform::transform;
use crate::{EdtError, EdtResult};
#[allow(unused_imports)]
use tracing::debug;

/// Builds a seed-height grid from a mask: `0.0` where `mask[i] == class`,
/// `INFINITY` elsewhere.
///
/// # Example
///
/// ```rust
/// use sdf_edt::sdf::seeds_from_mask;
///
/// let seeds = seeds_from_mask(&[true, false, true], true);
/// assert_eq!(seeds[0], 0.0);
/// assert!(seeds[1].is_infinite());
/// ```
pub fn seeds_from_mask(mask: &[bool], class: bool) -> Vec<f32> {
    mask.iter()
        .map(|&m| if m == class { 0.0 } else { f32::INFINITY })
        .collect()
}

/// Signed Euclidean distance field from an inside/outside mask.
///
/// `mask` is row-major width x height, `true` for pixels inside the shape.
/// The result holds, per pixel, `distance to nearest outside pixel` minus
/// `distance to nearest inside pixel`: positive inside, negative outside,
/// magnitude the exact Euclidean distance to the opposite class. An
/// all-one-class mask yields an all-infinite field of the matching sign.
///
/// The two unsigned transforms are independent and run concurrently when
/// the `parallel` feature is enabled.
///
/// # Errors
///
/// Same conditions as [`transform`](crate::transform()).
///
/// # Example
///
/// ```rust
/// use sdf_edt::signed_field;
///
/// // 3x3 mask, inside only at the center
/// let mask = [
///     false, false, false,
///     false, true, false,
///     false, false, false,
/// ];
/// let sdf = signed_field(&mask, 3, 3).unwrap();
/// assert!(sdf[4] > 0.0);
/// assert!(sdf[0] < 0.0);
/// ```
pub fn signed_field(mask: &[bool], width: usize, height: usize) -> EdtResult<Vec<f32>> {
    let mut to_outside = seeds_from_mask(mask, false);
    let mut to_inside = seeds_from_mask(mask, true);
    debug!(width, height, "signed distance field");

    run_pair(&mut to_outside, &mut to_inside, width, height)?;

    // Positive inside, negative outside.
    let sdf = to_outside
        .iter()
        .zip(to_inside.iter())
        .map(|(&out, &ins)| out - ins)
        .collect();
    Ok(sdf)
}

#[cfg(feature = "parallel")]
fn run_pair(a: &mut [f32], b: &mut [f32], width: usize, height: usize) -> EdtResult<()> {
    let (ra, rb) = rayon::join(
        || transform(a, width, height),
        || transform(b, width, height),
    );
    ra?;
    rb
}

#[cfg(not(feature = "parallel"))]
fn run_pair(a: &mut [f32], b: &mut [f32], width: usize, height: usize) -> EdtResult<()> {
    transform(a, width, height)?;
    transform(b, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_from_mask_classes() {
        let mask = [true, false, false, true];
        let inside = seeds_from_mask(&mask, true);
        let outside = seeds_from_mask(&mask, false);
        assert_eq!(inside[0], 0.0);
        assert!(inside[1].is_infinite());
        assert!(outside[0].is_infinite());
        assert_eq!(outside[1], 0.0);
    }

    #[test]
    fn test_sign_convention() {
        // 4x4, left half inside
        let mut mask = [false; 16];
        for y in 0..4 {
            mask[y * 4] = true;
            mask[y * 4 + 1] = true;
        }
        let sdf = signed_field(&mask, 4, 4).unwrap();
        for y in 0..4 {
            assert!(sdf[y * 4] > 0.0, "inside must be positive");
            assert!(sdf[y * 4 + 3] < 0.0, "outside must be negative");
        }
    }

    #[test]
    fn test_magnitude_at_boundary_columns() {
        // Vertical boundary between x=1 and x=2: the boundary-adjacent
        // columns are 1 pixel from the opposite class.
        let mut mask = [false; 16];
        for y in 0..4 {
            mask[y * 4] = true;
            mask[y * 4 + 1] = true;
        }
        let sdf = signed_field(&mask, 4, 4).unwrap();
        for y in 0..4 {
            assert_eq!(sdf[y * 4 + 1], 1.0);
            assert_eq!(sdf[y * 4 + 2], -1.0);
            assert_eq!(sdf[y * 4], 2.0);
            assert_eq!(sdf[y * 4 + 3], -2.0);
        }
    }

    #[test]
    fn test_all_inside_is_positive_infinite() {
        let sdf = signed_field(&[true; 9], 3, 3).unwrap();
        assert!(sdf.iter().all(|&v| v == f32::INFINITY));
    }

    #[test]
    fn test_mask_length_mismatch_rejected() {
        assert!(matches!(
            signed_field(&[true; 10], 4, 3),
            Err(EdtError::SizeMismatch(_))
        ));
    }
}
