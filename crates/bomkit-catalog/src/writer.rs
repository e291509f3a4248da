//! TOML version catalog rendering.

use std::collections::HashSet;
use std::fmt;

use bomkit_core::dependency::DependencyId;
use bomkit_core::keys::{library_key, plugin_key, version_key, KeyAlias};

use crate::accumulate::Accumulator;

/// Marker in a plugin marker artifact name; the plugin id is the text before it.
const GRADLE_PLUGIN_MARKER: &str = ".gradle.plugin";

/// Section that receives a catalog project's own declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSection {
    Libraries,
    Plugins,
}

impl TargetSection {
    /// Plugin BOMs (names containing `plugin_marker`) target `[plugins]`.
    pub fn for_project(project_name: &str, plugin_marker: &str) -> Self {
        if !plugin_marker.is_empty() && project_name.contains(plugin_marker) {
            Self::Plugins
        } else {
            Self::Libraries
        }
    }
}

/// Rendering policy for one catalog variant.
#[derive(Debug, Clone)]
pub struct WriteOptions<'a> {
    /// Versioned (standalone) catalog when `true`, BOM-relative otherwise.
    pub include_versions: bool,
    pub target: TargetSection,
    /// The generating project, which never lists itself as a plugin.
    pub self_id: DependencyId,
    pub bom_suffix: &'a str,
    pub alias: &'a KeyAlias,
}

/// A rendered catalog, ready to be written.
///
/// `Display` produces the file content: `[versions]` (when present),
/// `[libraries]`, `[plugins]` and an always-empty `[bundles]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDocument {
    pub versions: Option<Vec<(String, String)>>,
    pub libraries: Vec<CatalogLine>,
    pub plugins: Vec<CatalogLine>,
}

/// One `key = { module|id = "…", version.ref = "…" }` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLine {
    pub key: String,
    pub notation: Notation,
    pub version_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notation {
    Module(String),
    Id(String),
}

impl CatalogDocument {
    pub fn build(acc: &Accumulator, opts: &WriteOptions<'_>) -> Self {
        let has_bom_suffix =
            |id: &DependencyId| !opts.bom_suffix.is_empty() && id.artifact.ends_with(opts.bom_suffix);
        let is_platform = |id: &DependencyId| has_bom_suffix(id) || acc.is_platform_tagged(id);

        let ids: Vec<DependencyId> = acc.entries().iter().map(|e| e.coordinate.id()).collect();

        let versions = if opts.include_versions {
            Some(
                acc.versions()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            )
        } else if ids.iter().any(|id| is_platform(id)) {
            // Only platforms keep a version; everything else inherits it from the BOM.
            let platform_keys: HashSet<String> = ids
                .iter()
                .filter(|id| is_platform(*id))
                .map(|id| version_key(&id.group, &id.artifact))
                .collect();
            Some(
                acc.versions()
                    .iter()
                    .filter(|(k, _)| platform_keys.contains(*k))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            )
        } else {
            None
        };

        let mut libraries = Vec::new();
        let mut used = HashSet::new();
        for id in ids.iter().filter(|id| !acc.is_plugin(id)) {
            let key = library_key(&id.group, &id.artifact, opts.alias);
            if !used.insert(key.clone()) {
                continue;
            }
            let version_ref = (opts.include_versions || is_platform(id))
                .then(|| version_key(&id.group, &id.artifact));
            libraries.push(CatalogLine {
                key,
                notation: Notation::Module(format!("{}:{}", id.group, id.artifact)),
                version_ref,
            });
        }

        let mut plugins = Vec::new();
        let mut used = HashSet::new();
        for id in ids.iter().filter(|id| {
            **id != opts.self_id && (acc.is_plugin(id) || opts.target == TargetSection::Plugins)
        }) {
            let key = plugin_key(&id.group, &id.artifact, opts.alias);
            if !used.insert(key.clone()) {
                continue;
            }
            // Narrower than libraries: without versions only BOM-suffixed platforms keep a ref.
            let version_ref = (opts.include_versions || (is_platform(id) && has_bom_suffix(id)))
                .then(|| version_key(&id.group, &id.artifact));
            plugins.push(CatalogLine {
                key,
                notation: Notation::Id(plugin_id(id)),
                version_ref,
            });
        }

        Self {
            versions,
            libraries,
            plugins,
        }
    }
}

/// Plugin id for a plugin marker artifact (`….gradle.plugin`) or a plain
/// `group.artifact` pair.
pub fn plugin_id(id: &DependencyId) -> String {
    match id.artifact.find(GRADLE_PLUGIN_MARKER) {
        Some(idx) => id.artifact[..idx].to_string(),
        None => format!("{}.{}", id.group, id.artifact),
    }
}

impl fmt::Display for CatalogDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(versions) = &self.versions {
            writeln!(f, "[versions]")?;
            for (key, version) in versions {
                writeln!(f, "{key} = {}", quote(version))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "[libraries]")?;
        for line in &self.libraries {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;

        writeln!(f, "[plugins]")?;
        for line in &self.plugins {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;

        writeln!(f, "[bundles]")
    }
}

impl fmt::Display for CatalogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (field, value) = match &self.notation {
            Notation::Module(m) => ("module", m),
            Notation::Id(id) => ("id", id),
        };
        write!(f, "{} = {{ {field} = {}", self.key, quote(value))?;
        if let Some(version_ref) = &self.version_ref {
            write!(f, ", version.ref = {}", quote(version_ref))?;
        }
        write!(f, " }}")
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
