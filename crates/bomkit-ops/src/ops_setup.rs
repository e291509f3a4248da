//! Loading the build every operation works on.

use std::path::{Path, PathBuf};

use bomkit_catalog::GenerationContext;
use bomkit_core::config::BomkitConfig;
use bomkit_core::project::{BuildModel, BuildProject};
use bomkit_util::errors::BomkitError;

/// A loaded build: its root, `bomkit.toml` and project model.
#[derive(Debug, Clone)]
pub struct Preflight {
    pub root_dir: PathBuf,
    pub config: BomkitConfig,
    pub model: BuildModel,
}

impl Preflight {
    pub fn context(&self) -> GenerationContext<'_> {
        GenerationContext {
            model: &self.model,
            settings: &self.config.catalog,
        }
    }

    /// The catalog projects an operation applies to: `project` alone when
    /// given, otherwise every project applying the catalog plugin.
    pub fn catalog_projects(&self, project: Option<&str>) -> miette::Result<Vec<&BuildProject>> {
        let plugin_id = &self.config.catalog.plugin_id;
        match project {
            Some(path) => {
                let project = self.model.project(path)?;
                if !project.applies_plugin(plugin_id)? {
                    return Err(BomkitError::Project {
                        message: format!("Project '{path}' does not apply the {plugin_id} plugin"),
                    }
                    .into());
                }
                Ok(vec![project])
            }
            None => {
                let projects = self.model.projects_applying(plugin_id)?;
                if projects.is_empty() {
                    tracing::info!("No project applies {plugin_id}; nothing to do");
                }
                Ok(projects)
            }
        }
    }
}

/// The build root: `explicit` if given, else the nearest ancestor of the
/// current directory holding a settings script.
pub fn resolve_root(explicit: Option<&Path>) -> miette::Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().map_err(BomkitError::Io)?;
            BuildModel::discover_root(&cwd)
        }
    }
}

/// Load `bomkit.toml` and the build model rooted at `root_dir`.
pub fn preflight(root_dir: &Path) -> miette::Result<Preflight> {
    let config = BomkitConfig::load(root_dir)?;
    let model = BuildModel::load(root_dir, &config.project)?;
    Ok(Preflight {
        root_dir: root_dir.to_path_buf(),
        config,
        model,
    })
}
