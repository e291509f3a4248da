//! BOM-to-catalog generation.
//!
//! A catalog project's build script is scanned for dependency constraints and
//! platform references ([`matchers`]); platform projects are expanded
//! recursively ([`extract`]) into an [`accumulate::Accumulator`] that keeps
//! first-seen versions and classification tags; [`writer`] renders the result
//! as a TOML version catalog, and [`generate`] writes the versioned and
//! BOM-relative variants for a project.

pub mod accumulate;
pub mod conflict;
pub mod extract;
pub mod generate;
pub mod matchers;
pub mod writer;

pub use generate::{generate, CatalogPaths, GeneratedCatalog, GenerationContext};
