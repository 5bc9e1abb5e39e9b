//! Integration tests for SDF-RS crates.
//!
//! Verifies the separable transform end to end against brute-force
//! references: the [`reference`] module implements the defining
//! minimization `min_p (dx^2 + dy^2 + cost[p])` directly, with no
//! envelope machinery to share bugs with.

pub mod reference;
