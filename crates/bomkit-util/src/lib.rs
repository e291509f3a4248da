//! Shared utilities for bomkit.
//!
//! This crate provides cross-cutting concerns used by all other bomkit crates:
//! the unified error type, filesystem helpers (ancestor lookup, atomic writes),
//! the checksums written next to staged artifacts, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod status;
