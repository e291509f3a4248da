//! Core data types for bomkit.
//!
//! This crate defines the on-disk build model that catalog generation reads
//! (settings, projects, `gradle.properties`), the tool configuration loaded
//! from `bomkit.toml`, the catalog key rules, and a typed view of generated
//! catalog files.
//!
//! No generation logic or network I/O lives here.

/// Name of the settings script that marks the root of a build.
pub const SETTINGS_FILE: &str = "settings.gradle.kts";

/// Name of the per-project build script scanned for declarations.
pub const BUILD_FILE: &str = "build.gradle.kts";

/// Name of the optional tool configuration file at the build root.
pub const CONFIG_FILE: &str = "bomkit.toml";

pub mod config;
pub mod dependency;
pub mod keys;
pub mod project;
pub mod properties;
pub mod script;
pub mod settings;
pub mod version_catalog;
