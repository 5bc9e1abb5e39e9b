//! # sdf-edt
//!
//! Exact Euclidean distance transform for signed-distance-field generation.
//!
//! Implements the separable lower-envelope-of-parabolas algorithm of
//! Felzenszwalb & Huttenlocher ("Distance Transforms of Sampled Functions"),
//! computing for every pixel the exact Euclidean distance to the nearest
//! seed pixel in O(width * height).
//!
//! # Modules
//!
//! - [`envelope`] - 1D squared-distance transform over a single row
//! - [`transform`] - 2D transform (row pass, transpose, column pass, sqrt)
//! - [`sdf`] - signed-field combination from a boolean mask
//!
//! # Example
//!
//! ```rust
//! use sdf_edt::transform;
//!
//! // 4x4 grid, one seed in the top-left corner
//! let mut grid = vec![f32::INFINITY; 16];
//! grid[0] = 0.0;
//! transform(&mut grid, 4, 4).unwrap();
//!
//! assert_eq!(grid[0], 0.0);
//! assert_eq!(grid[3], 3.0); // (3,0) is 3 pixels right of the seed
//! assert_eq!(grid[15], 18.0f32.sqrt()); // (3,3) diagonal
//! ```
//!
//! # Input convention
//!
//! The transform consumes a grid of "seed heights": `0.0` at seed pixels,
//! `f32::INFINITY` elsewhere. More generally any finite value acts as a
//! per-pixel baseline cost and the transform computes
//! `min_p (dx^2 + dy^2 + cost[p])` before the square root.
//!
//! # Feature Flags
//!
//! - `parallel` - rayon data-parallel row/column passes (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod envelope;
pub mod sdf;
pub mod transform;

pub use envelope::{transform_row, transform_row_with, Envelope};
pub use error::{EdtError, EdtResult};
pub use sdf::signed_field;
pub use transform::{transform, transform_field};
