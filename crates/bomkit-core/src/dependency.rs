use std::fmt;

/// The `(group, artifact)` identity of a dependency, independent of version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyId {
    pub group: String,
    pub artifact: String,
}

impl DependencyId {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// Maven coordinates of a declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Parse dependency notation as written in a build script.
    ///
    /// Accepts `group:artifact:version` and the elided forms
    /// `group::version` and `group:version`. When the artifact is elided the
    /// last dot segment of `group` is the artifact and the remainder is the
    /// group, so `org.example::1.0.0` is `org` / `example` / `1.0.0`.
    /// A group without dots names both group and artifact.
    ///
    /// Returns `None` for anything else (empty group or version, extra
    /// segments).
    pub fn parse(notation: &str) -> Option<Self> {
        let parts: Vec<&str> = notation.split(':').collect();
        let (group, artifact, version) = match parts.as_slice() {
            [group, artifact, version] => (*group, Some(*artifact).filter(|a| !a.is_empty()), *version),
            [group, version] => (*group, None, *version),
            _ => return None,
        };
        if group.is_empty() || version.is_empty() {
            return None;
        }
        match artifact {
            Some(artifact) => Some(Self::new(group, artifact, version)),
            None => {
                let (group, artifact) = group.rsplit_once('.').unwrap_or((group, group));
                if group.is_empty() || artifact.is_empty() {
                    return None;
                }
                Some(Self::new(group, artifact, version))
            }
        }
    }

    pub fn id(&self) -> DependencyId {
        DependencyId::new(&self.group, &self.artifact)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
