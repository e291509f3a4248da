//! Maven directory layout of a local repository.

use std::path::{Path, PathBuf};

/// A Maven-layout directory on disk, e.g. `build/repo` or `~/.m2/repository`.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    pub root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `com.sphereon.gradle:library-bom:0.1.0` becomes
    /// `com/sphereon/gradle/library-bom/0.1.0`
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// Directory holding every file of one version.
    pub fn version_dir(&self, group: &str, artifact: &str, version: &str) -> PathBuf {
        Self::coordinate_path(group, artifact, version)
            .split('/')
            .fold(self.root.clone(), |dir, segment| dir.join(segment))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_path_replaces_dots() {
        assert_eq!(
            LocalRepository::coordinate_path("com.sphereon.gradle", "library-bom", "0.1.0"),
            "com/sphereon/gradle/library-bom/0.1.0"
        );
    }

    #[test]
    fn version_dir_is_below_root() {
        let repo = LocalRepository::new("/tmp/repo");
        assert_eq!(
            repo.version_dir("org.example", "foo", "1.0"),
            PathBuf::from("/tmp/repo/org/example/foo/1.0")
        );
    }
}
