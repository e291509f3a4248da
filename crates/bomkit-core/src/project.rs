//! The build model: projects of a multi-project build and their coordinates.

use std::path::{Path, PathBuf};

use regex::Regex;

use bomkit_util::errors::BomkitError;

use crate::config::ProjectDefaults;
use crate::dependency::{Coordinate, DependencyId};
use crate::properties::load_properties;
use crate::script::strip_comments;
use crate::settings::Settings;

/// Version Gradle reports for a project that never set one.
pub const UNSPECIFIED_VERSION: &str = "unspecified";

const PROPERTIES_FILE: &str = "gradle.properties";

/// One project of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildProject {
    /// Colon-separated project path; the root project is `:`.
    pub path: String,
    pub name: String,
    pub group: String,
    pub version: String,
    pub dir: PathBuf,
}

impl BuildProject {
    /// Path to this project's `build.gradle.kts` (which may not exist).
    pub fn build_file(&self) -> PathBuf {
        self.dir.join(crate::BUILD_FILE)
    }

    /// Read the build script, or `None` if the project has none.
    pub fn read_build_file(&self) -> miette::Result<Option<String>> {
        let path = self.build_file();
        if !path.is_file() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| BomkitError::Io(e).into())
    }

    pub fn id(&self) -> DependencyId {
        DependencyId::new(&self.group, &self.name)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group, &self.name, &self.version)
    }

    /// Whether this project's build script applies the plugin with `plugin_id`
    /// through `id("...")`. Commented-out declarations do not count.
    pub fn applies_plugin(&self, plugin_id: &str) -> miette::Result<bool> {
        let Some(content) = self.read_build_file()? else {
            return Ok(false);
        };
        let pattern = format!(r#"\bid\(\s*"{}"\s*\)"#, regex::escape(plugin_id));
        let plugin = Regex::new(&pattern).map_err(|e| BomkitError::Config {
            message: format!("Invalid plugin id '{plugin_id}': {e}"),
        })?;
        Ok(plugin.is_match(&strip_comments(&content)))
    }
}

/// All projects of a build, read from `settings.gradle.kts` and
/// `gradle.properties`.
#[derive(Debug, Clone)]
pub struct BuildModel {
    pub root_dir: PathBuf,
    projects: Vec<BuildProject>,
}

impl BuildModel {
    /// Find the build root: the nearest ancestor of `start` holding a settings script.
    pub fn discover_root(start: &Path) -> miette::Result<PathBuf> {
        bomkit_util::fs::find_ancestor_with(start, crate::SETTINGS_FILE).ok_or_else(|| {
            BomkitError::Settings {
                message: format!(
                    "Could not find {} in {} or any parent directory",
                    crate::SETTINGS_FILE,
                    start.display()
                ),
            }
            .into()
        })
    }

    /// Load the build rooted at `root_dir`.
    ///
    /// Group and version come from the root `gradle.properties`, overridden
    /// per project by the project's own `gradle.properties`, falling back to
    /// `defaults`.
    pub fn load(root_dir: &Path, defaults: &ProjectDefaults) -> miette::Result<Self> {
        let settings = Settings::from_path(&root_dir.join(crate::SETTINGS_FILE))?;
        let root_props = load_properties(&root_dir.join(PROPERTIES_FILE))?;

        let root_name = settings.root_name.clone().unwrap_or_else(|| {
            root_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        let mut paths = vec![":".to_string()];
        paths.extend(settings.includes.iter().cloned());

        let mut projects = Vec::with_capacity(paths.len());
        for path in paths {
            let dir = project_dir(root_dir, &path);
            let own_props = if path == ":" {
                Default::default()
            } else {
                load_properties(&dir.join(PROPERTIES_FILE))?
            };
            let lookup = |key: &str, fallback: &Option<String>| {
                own_props
                    .get(key)
                    .or_else(|| root_props.get(key))
                    .cloned()
                    .or_else(|| fallback.clone())
            };
            let name = if path == ":" {
                root_name.clone()
            } else {
                path.rsplit(':').next().unwrap_or_default().to_string()
            };
            projects.push(BuildProject {
                group: lookup("group", &defaults.group).unwrap_or_default(),
                version: lookup("version", &defaults.version)
                    .unwrap_or_else(|| UNSPECIFIED_VERSION.to_string()),
                name,
                path,
                dir,
            });
        }

        tracing::debug!(
            "Loaded build '{}' with {} projects from {}",
            root_name,
            projects.len(),
            root_dir.display()
        );

        Ok(Self {
            root_dir: root_dir.to_path_buf(),
            projects,
        })
    }

    pub fn projects(&self) -> &[BuildProject] {
        &self.projects
    }

    /// Look up a project by its absolute path.
    pub fn project(&self, path: &str) -> miette::Result<&BuildProject> {
        self.projects
            .iter()
            .find(|p| p.path == path)
            .ok_or_else(|| {
                BomkitError::Project {
                    message: format!("Project with path '{path}' could not be found"),
                }
                .into()
            })
    }

    /// Resolve a `project("...")` reference made from `from`.
    ///
    /// Absolute references start with `:`; anything else is relative to `from`.
    pub fn resolve(&self, from: &BuildProject, reference: &str) -> miette::Result<&BuildProject> {
        if reference.starts_with(':') {
            return self.project(reference);
        }
        let absolute = if from.path == ":" {
            format!(":{reference}")
        } else {
            format!("{}:{reference}", from.path)
        };
        self.project(&absolute)
    }

    /// Projects whose build script applies `plugin_id`, in settings order.
    pub fn projects_applying(&self, plugin_id: &str) -> miette::Result<Vec<&BuildProject>> {
        let mut found = Vec::new();
        for project in &self.projects {
            if project.applies_plugin(plugin_id)? {
                found.push(project);
            }
        }
        Ok(found)
    }
}

fn project_dir(root_dir: &Path, path: &str) -> PathBuf {
    path.split(':')
        .filter(|segment| !segment.is_empty())
        .fold(root_dir.to_path_buf(), |dir, segment| dir.join(segment))
}
