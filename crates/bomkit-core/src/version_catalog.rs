//! Typed view of a generated version catalog, used to verify output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use bomkit_util::errors::BomkitError;

/// A parsed `libs.versions.toml`-style catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
    #[serde(default)]
    pub libraries: BTreeMap<String, CatalogLibrary>,
    #[serde(default)]
    pub plugins: BTreeMap<String, CatalogPlugin>,
    #[serde(default)]
    pub bundles: BTreeMap<String, Vec<String>>,
}

/// A library entry: `{ module = "group:artifact", version.ref = "key" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLibrary {
    pub module: String,
    #[serde(default)]
    pub version: Option<VersionSpec>,
}

/// A plugin entry: `{ id = "plugin.id", version.ref = "key" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPlugin {
    pub id: String,
    #[serde(default)]
    pub version: Option<VersionSpec>,
}

/// Either a literal version or a `version.ref` into `[versions]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionSpec {
    Literal(String),
    Ref {
        #[serde(rename = "ref")]
        reference: String,
    },
}

impl VersionSpec {
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Ref { reference } => Some(reference),
            Self::Literal(_) => None,
        }
    }
}

/// A problem found while checking a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A `version.ref` names a key missing from `[versions]`.
    DanglingVersionRef {
        section: &'static str,
        key: String,
        reference: String,
    },
    /// A bundle lists a library key that does not exist.
    UnknownBundleMember { bundle: String, library: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingVersionRef {
                section,
                key,
                reference,
            } => write!(
                f,
                "[{section}] {key} references version '{reference}' which is not declared in [versions]"
            ),
            Self::UnknownBundleMember { bundle, library } => {
                write!(f, "[bundles] {bundle} lists unknown library '{library}'")
            }
        }
    }
}

impl CatalogFile {
    /// Load and parse a catalog file. Duplicate keys are rejected by the TOML parser.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BomkitError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content).map_err(|e| {
            BomkitError::Catalog {
                message: format!("{}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Parse catalog text.
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Every reference that does not resolve within this same file.
    pub fn check(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for (key, lib) in &self.libraries {
            if let Some(reference) = lib.version.as_ref().and_then(VersionSpec::reference) {
                if !self.versions.contains_key(reference) {
                    issues.push(CatalogIssue::DanglingVersionRef {
                        section: "libraries",
                        key: key.clone(),
                        reference: reference.to_string(),
                    });
                }
            }
        }
        for (key, plugin) in &self.plugins {
            if let Some(reference) = plugin.version.as_ref().and_then(VersionSpec::reference) {
                if !self.versions.contains_key(reference) {
                    issues.push(CatalogIssue::DanglingVersionRef {
                        section: "plugins",
                        key: key.clone(),
                        reference: reference.to_string(),
                    });
                }
            }
        }
        for (bundle, members) in &self.bundles {
            for library in members {
                if !self.libraries.contains_key(library) {
                    issues.push(CatalogIssue::UnknownBundleMember {
                        bundle: bundle.clone(),
                        library: library.clone(),
                    });
                }
            }
        }
        issues
    }

    /// Resolve a library key to `group:artifact:version`, following `version.ref`.
    ///
    /// Libraries without a version (BOM-relative entries) resolve with an empty version.
    pub fn resolve_library(&self, key: &str) -> Option<String> {
        let lib = self.libraries.get(key)?;
        let version = match &lib.version {
            Some(VersionSpec::Ref { reference }) => self.versions.get(reference).cloned(),
            Some(VersionSpec::Literal(v)) => Some(v.clone()),
            None => None,
        }
        .unwrap_or_default();
        Some(format!("{}:{version}", lib.module))
    }
}
