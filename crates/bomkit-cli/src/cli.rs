//! CLI argument definitions for bomkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bomkit",
    version,
    about = "Generate TOML version catalogs from Gradle BOM projects",
    long_about = "bomkit reads the platform projects of a Gradle build and writes, for every \
                  project applying the catalog plugin, a standalone versioned catalog and a \
                  BOM-relative catalog, and stages them for publication."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Build root (default: nearest directory with settings.gradle.kts)
    #[arg(long, global = true, env = "BOMKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate TOML catalogs
    Generate {
        /// Only this project, e.g. :versions:library-bom
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Check the license, generate catalogs and stage them in a Maven-layout repository
    Publish {
        /// Only this project
        #[arg(short, long)]
        project: Option<String>,
        /// Repository directory (default: <root>/build/repo)
        #[arg(long)]
        repo: Option<PathBuf>,
    },

    /// List the projects of the build
    Projects,

    /// Verify generated catalog files
    Check {
        /// Catalog files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
