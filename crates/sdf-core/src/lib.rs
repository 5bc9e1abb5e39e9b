//! # sdf-core
//!
//! Core types for signed-distance-field generation.
//!
//! This crate provides the foundational types used by the SDF-RS crates:
//!
//! - [`Field`] - Owned single-channel `f32` grid, row-major
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Semantics
//!
//! A [`Field`] carries one scalar per pixel. For distance-transform input
//! the convention is `0.0` at seed pixels and `f32::INFINITY` everywhere
//! else; after a transform the same buffer holds distances. The container
//! itself is agnostic - it is just a validated width x height buffer.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of SDF-RS and has no internal dependencies:
//!
//! ```text
//! sdf-core (this crate)
//!    ^
//!    |
//!    +-- sdf-edt (distance transform engine)
//!    +-- sdf-tests, sdf-bench
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod field;

pub use error::{Error, Result};
pub use field::Field;
