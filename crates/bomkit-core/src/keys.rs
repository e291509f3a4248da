//! Catalog key rules.
//!
//! Version, library and plugin keys share one derivation: take the last dot
//! segment of the group, drop it from the front of the artifact when the
//! artifact repeats it (`dev.whyoleg.cryptography` + `cryptography-core`
//! becomes `dev.whyoleg.cryptography-core`), then replace every `.` with `-`
//! since catalog keys may not contain dots. Library and plugin keys also
//! collapse the internal organisation prefix to its alias.

use crate::config::CatalogSettings;

/// Derive the canonical, dot-free key for `group` + `artifact`.
pub fn normalize_key(group: &str, artifact: &str) -> String {
    let group_last = group.rsplit('.').next().unwrap_or(group);
    let key = match artifact.strip_prefix(group_last).and_then(|rest| rest.strip_prefix('-')) {
        Some(remainder) => format!("{group}-{remainder}"),
        None => format!("{group}-{artifact}"),
    };
    key.replace('.', "-")
}

/// Key of a `[versions]` entry.
pub fn version_key(group: &str, artifact: &str) -> String {
    normalize_key(group, artifact)
}

/// Prefix collapse applied to library and plugin keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAlias {
    pub prefix: String,
    pub alias: String,
}

impl KeyAlias {
    pub fn new(prefix: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            alias: alias.into(),
        }
    }

    pub fn from_settings(settings: &CatalogSettings) -> Self {
        Self::new(&settings.internal_key_prefix, &settings.internal_key_alias)
    }

    /// Replace every occurrence of the prefix with the alias.
    pub fn apply(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            return key.to_string();
        }
        key.replace(&self.prefix, &self.alias)
    }
}

/// Key of a `[libraries]` entry.
pub fn library_key(group: &str, artifact: &str, alias: &KeyAlias) -> String {
    alias.apply(&normalize_key(group, artifact))
}

/// Key of a `[plugins]` entry.
pub fn plugin_key(group: &str, artifact: &str, alias: &KeyAlias) -> String {
    alias.apply(&normalize_key(group, artifact))
}

/// Catalog file stem: the organisation token followed by the project name
/// with hyphens removed and each segment capitalised
/// (`sphereon` + `library-bom` = `sphereonLibraryBom`).
pub fn catalog_name(organization: &str, project_name: &str) -> String {
    let tokens: String = project_name.split('-').map(capitalize).collect();
    format!("{organization}{tokens}")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
