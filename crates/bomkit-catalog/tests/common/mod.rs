use std::fs;
use std::path::Path;

use bomkit_core::config::{BomkitConfig, ProjectDefaults};
use bomkit_core::project::BuildModel;
use tempfile::TempDir;

/// A throwaway multi-project build.
pub struct Fixture {
    pub tmp: TempDir,
    pub model: BuildModel,
    pub config: BomkitConfig,
}

/// Create a build whose projects are `(path, build script)` pairs. A `None`
/// script leaves the project without a `build.gradle.kts`.
pub fn fixture(group: &str, version: &str, projects: &[(&str, Option<&str>)]) -> Fixture {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let includes: String = projects
        .iter()
        .map(|(path, _)| format!("include(\"{path}\")\n"))
        .collect();
    fs::write(
        root.join("settings.gradle.kts"),
        format!("rootProject.name = \"fixture\"\n{includes}"),
    )
    .unwrap();
    fs::write(
        root.join("gradle.properties"),
        format!("group={group}\nversion={version}\n"),
    )
    .unwrap();
    for (path, script) in projects {
        let dir = project_dir(root, path);
        fs::create_dir_all(&dir).unwrap();
        if let Some(script) = script {
            fs::write(dir.join("build.gradle.kts"), script).unwrap();
        }
    }
    let model = BuildModel::load(root, &ProjectDefaults::default()).unwrap();
    Fixture {
        tmp,
        model,
        config: BomkitConfig::default(),
    }
}

fn project_dir(root: &Path, path: &str) -> std::path::PathBuf {
    path.split(':')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |dir, s| dir.join(s))
}
