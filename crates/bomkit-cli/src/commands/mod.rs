//! Command dispatch and handler modules.

mod check;
mod generate;
mod projects;
mod publish;

use miette::Result;

use bomkit_ops::ops_setup::{self, Preflight};

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { project } => generate::exec(&load(&cli.root)?, project),
        Command::Publish { project, repo } => publish::exec(&load(&cli.root)?, project, repo),
        Command::Projects => projects::exec(&load(&cli.root)?),
        Command::Check { files } => check::exec(&files),
    }
}

fn load(root: &Option<std::path::PathBuf>) -> Result<Preflight> {
    let root_dir = ops_setup::resolve_root(root.as_deref())?;
    ops_setup::preflight(&root_dir)
}
