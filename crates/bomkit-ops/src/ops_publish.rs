//! Operation: publish catalogs into a local Maven-layout repository.

use std::path::PathBuf;

use bomkit_catalog::generate::GENERATE_TASK;
use bomkit_core::project::BuildProject;
use bomkit_publish::license::ensure_apache_license;
use bomkit_publish::repository::LocalRepository;
use bomkit_publish::{stage, CatalogPublication, StagedPublication};
use bomkit_util::errors::BomkitError;

use crate::ops_setup::Preflight;

/// Directory, relative to the build root, staged into when no repository is given.
pub const DEFAULT_REPO_DIR: &str = "build/repo";

/// Options for `bomkit publish`.
#[derive(Debug, Default)]
pub struct PublishOptions {
    pub project: Option<String>,
    /// Target repository directory; defaults to `<root>/build/repo`.
    pub repo: Option<PathBuf>,
}

/// Result of a publish operation.
#[derive(Debug)]
pub struct PublishResult {
    pub repo: PathBuf,
    pub staged: Vec<StagedPublication>,
}

/// Publish each selected catalog project.
///
/// Every project must carry an Apache 2.0 license; the check runs for all of
/// them before anything is generated or staged.
pub fn publish(pre: &Preflight, opts: &PublishOptions) -> miette::Result<PublishResult> {
    let projects = pre.catalog_projects(opts.project.as_deref())?;
    for project in &projects {
        ensure_apache_license(&project.dir, &pre.root_dir)?;
    }

    let repo_dir = opts
        .repo
        .clone()
        .unwrap_or_else(|| pre.root_dir.join(DEFAULT_REPO_DIR));
    let repo = LocalRepository::new(&repo_dir);

    let mut staged = Vec::new();
    for project in projects {
        let publication = CatalogPublication::for_project(project, &pre.config.catalog);
        for task in publication.built_by() {
            run_task(pre, project, task)?;
        }
        staged.push(stage(&publication, &pre.config.publication, &repo)?);
    }

    Ok(PublishResult {
        repo: repo_dir,
        staged,
    })
}

fn run_task(pre: &Preflight, project: &BuildProject, task: &str) -> miette::Result<()> {
    tracing::debug!("Running {task} for {}", project.path);
    match task {
        GENERATE_TASK => bomkit_catalog::generate(pre.context(), project).map(|_| ()),
        other => Err(BomkitError::Generic {
            message: format!("Unknown task '{other}' required by {}", project.path),
        }
        .into()),
    }
}
