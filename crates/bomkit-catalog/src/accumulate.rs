//! Dependency and version accumulation for one catalog.

use indexmap::IndexMap;
use std::collections::HashSet;

use bomkit_core::dependency::{Coordinate, DependencyId};
use bomkit_core::keys::version_key;

use crate::conflict::{ConflictReport, VersionConflict};

/// Placeholders in a declared version that mean "the generating project's version".
const VERSION_PLACEHOLDERS: [&str; 2] = ["${version}", "$version"];

/// How a dependency reached the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The generating project itself.
    SelfEntry,
    /// An `api("…")` constraint of the generating project.
    Direct,
    /// An in-build platform project, or a declaration found while expanding one.
    ProjectPlatform,
    /// An `api(platform("…"))` reference to a published BOM.
    ExternalPlatform,
}

/// Classification applied when a dependency is first recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tags {
    pub platform: bool,
    pub plugin: bool,
}

impl Tags {
    pub const NONE: Tags = Tags {
        platform: false,
        plugin: false,
    };

    pub fn platform() -> Self {
        Self {
            platform: true,
            plugin: false,
        }
    }

    pub fn with_plugin(self, plugin: bool) -> Self {
        Self { plugin, ..self }
    }
}

/// A recorded dependency, in first-discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub coordinate: Coordinate,
    pub origin: Origin,
}

/// Working state of one generation run.
///
/// Dependencies are unique by `(group, artifact)` and kept in the order they
/// were first seen. Versions are keyed by [`version_key`]; a key keeps its
/// first version and every later, different version is reported as a
/// conflict.
#[derive(Debug)]
pub struct Accumulator {
    project_version: String,
    entries: Vec<Entry>,
    seen: HashSet<DependencyId>,
    versions: IndexMap<String, String>,
    platforms: HashSet<DependencyId>,
    plugins: HashSet<DependencyId>,
    conflicts: ConflictReport,
}

impl Accumulator {
    /// `project_version` replaces version placeholders in recorded declarations.
    pub fn new(project_version: impl Into<String>) -> Self {
        Self {
            project_version: project_version.into(),
            entries: Vec::new(),
            seen: HashSet::new(),
            versions: IndexMap::new(),
            platforms: HashSet::new(),
            plugins: HashSet::new(),
            conflicts: ConflictReport::new(),
        }
    }

    /// Record a declaration. Returns `true` if the `(group, artifact)` pair is new.
    ///
    /// The version is checked against the version map on every call, so a
    /// repeated pair with a different version is still reported. Tags only
    /// apply to the first record of a pair.
    pub fn record(&mut self, coordinate: Coordinate, origin: Origin, tags: Tags) -> bool {
        let coordinate = Coordinate {
            version: self.resolve_version(&coordinate.version),
            ..coordinate
        };
        let id = coordinate.id();

        self.bind_version(&id, &coordinate.version);

        if !self.seen.insert(id.clone()) {
            return false;
        }
        if tags.platform {
            self.platforms.insert(id.clone());
        }
        if tags.plugin {
            self.plugins.insert(id);
        }
        self.entries.push(Entry { coordinate, origin });
        true
    }

    /// Substitute the project version for a version placeholder.
    pub fn resolve_version(&self, version: &str) -> String {
        if VERSION_PLACEHOLDERS.contains(&version) {
            self.project_version.clone()
        } else {
            version.to_string()
        }
    }

    fn bind_version(&mut self, id: &DependencyId, version: &str) {
        let key = version_key(&id.group, &id.artifact);
        match self.versions.get(&key) {
            Some(existing) if existing != version => {
                tracing::warn!(
                    "Version conflict for key '{key}': existing='{existing}', new='{version}'. Keeping existing version."
                );
                self.conflicts.add(VersionConflict {
                    key,
                    kept: existing.clone(),
                    rejected: version.to_string(),
                    source: id.to_string(),
                });
            }
            Some(_) => {}
            None => {
                self.versions.insert(key, version.to_string());
            }
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Version keys and versions, in first-bound order.
    pub fn versions(&self) -> &IndexMap<String, String> {
        &self.versions
    }

    pub fn version(&self, key: &str) -> Option<&str> {
        self.versions.get(key).map(String::as_str)
    }

    pub fn contains(&self, id: &DependencyId) -> bool {
        self.seen.contains(id)
    }

    pub fn is_platform_tagged(&self, id: &DependencyId) -> bool {
        self.platforms.contains(id)
    }

    pub fn is_plugin(&self, id: &DependencyId) -> bool {
        self.plugins.contains(id)
    }

    pub fn conflicts(&self) -> &ConflictReport {
        &self.conflicts
    }

    pub fn into_conflicts(self) -> ConflictReport {
        self.conflicts
    }
}
