use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all bomkit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum BomkitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `settings.gradle.kts` or `gradle.properties` could not be read.
    #[error("Settings error: {message}")]
    #[diagnostic(help("Run bomkit from a directory containing settings.gradle.kts, or pass --root"))]
    Settings { message: String },

    /// A project path did not resolve to a project of the build.
    #[error("Project error: {message}")]
    #[diagnostic(help("Check the include(...) lines in settings.gradle.kts"))]
    Project { message: String },

    /// Invalid or malformed `bomkit.toml`.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your bomkit.toml for syntax errors"))]
    Config { message: String },

    /// Catalog generation or catalog verification failed.
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Publication metadata could not be rendered or staged.
    #[error("Publication error: {message}")]
    Publication { message: String },

    /// The project is not eligible for publishing under its license.
    #[error("Publishing to Sonatype is not allowed: {message}")]
    #[diagnostic(help("Add an Apache 2.0 LICENSE or LICENSE.md file to the project or build root"))]
    License { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
