//! Shared utilities for bomfold.
//!
//! This crate provides cross-cutting concerns used by the other bomfold
//! crates: the tool-level error type, filesystem helpers and Cargo-style
//! terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
