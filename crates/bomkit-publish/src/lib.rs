//! Catalog publication: what gets published for a catalog project, the
//! metadata that describes it, and staging into a Maven-layout directory.

pub mod license;
pub mod module;
pub mod pom;
pub mod publication;
pub mod repository;
pub mod stage;

pub use publication::{CatalogArtifact, CatalogPublication};
pub use stage::{stage, StagedPublication};
