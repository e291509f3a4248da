use serde::{Deserialize, Serialize};
use std::path::Path;

use bomkit_util::errors::BomkitError;

/// Tool configuration loaded from `bomkit.toml` at the build root.
///
/// Every field has a default, so a build without the file behaves exactly
/// like one with an empty file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BomkitConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub project: ProjectDefaults,

    #[serde(default)]
    pub publication: PublicationConfig,
}

/// Catalog generation settings from `[catalog]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogSettings {
    /// Token prefixed to every catalog file name.
    #[serde(default = "default_organization")]
    pub organization: String,
    /// Key fragment collapsed in library and plugin keys.
    #[serde(default = "default_internal_key_prefix")]
    pub internal_key_prefix: String,
    /// Replacement for `internal_key_prefix`.
    #[serde(default = "default_internal_key_alias")]
    pub internal_key_alias: String,
    /// Plugin id whose presence in a build script marks a catalog project.
    #[serde(default = "default_plugin_id")]
    pub plugin_id: String,
    /// Project-name fragment marking a plugin BOM.
    #[serde(default = "default_plugin_marker")]
    pub plugin_marker: String,
    /// Artifact-name suffix marking a BOM.
    #[serde(default = "default_bom_suffix")]
    pub bom_suffix: String,
    /// Classifier of the version-less catalog artifact.
    #[serde(default = "default_classifier")]
    pub classifier: String,
    /// Output directory, relative to each project directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            internal_key_prefix: default_internal_key_prefix(),
            internal_key_alias: default_internal_key_alias(),
            plugin_id: default_plugin_id(),
            plugin_marker: default_plugin_marker(),
            bom_suffix: default_bom_suffix(),
            classifier: default_classifier(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_organization() -> String {
    "sphereon".to_string()
}

fn default_internal_key_prefix() -> String {
    "com-sphereon".to_string()
}

fn default_internal_key_alias() -> String {
    "sphereon".to_string()
}

fn default_plugin_id() -> String {
    "com.sphereon.gradle.toml-catalog".to_string()
}

fn default_plugin_marker() -> String {
    "gradle-plugin".to_string()
}

fn default_bom_suffix() -> String {
    "-bom".to_string()
}

fn default_classifier() -> String {
    "bom".to_string()
}

fn default_output_dir() -> String {
    "build/tomlCatalog".to_string()
}

/// Fallback coordinates from `[project]`, used when `gradle.properties`
/// does not set them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDefaults {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// POM metadata from `[publication]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PublicationConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_license_name")]
    pub license_name: String,
    #[serde(default = "default_license_url")]
    pub license_url: String,
    #[serde(default = "default_developer")]
    pub developer_id: String,
    #[serde(default = "default_developer")]
    pub developer_name: String,
    #[serde(default = "default_developer")]
    pub organization: String,
    #[serde(default = "default_organization_url")]
    pub organization_url: String,
    #[serde(default = "default_url")]
    pub scm_url: String,
}

impl Default for PublicationConfig {
    fn default() -> Self {
        Self {
            name: None,
            description: default_description(),
            url: default_url(),
            license_name: default_license_name(),
            license_url: default_license_url(),
            developer_id: default_developer(),
            developer_name: default_developer(),
            organization: default_developer(),
            organization_url: default_organization_url(),
            scm_url: default_url(),
        }
    }
}

fn default_description() -> String {
    "Gradle build support plugins and BOMs for consistent project setup".to_string()
}

fn default_url() -> String {
    "https://github.com/sphereon-opensource/gradle-build-support".to_string()
}

fn default_license_name() -> String {
    "The Apache License, Version 2.0".to_string()
}

fn default_license_url() -> String {
    "https://www.apache.org/licenses/LICENSE-2.0.txt".to_string()
}

fn default_developer() -> String {
    "Sphereon".to_string()
}

fn default_organization_url() -> String {
    "https://sphereon.com".to_string()
}

impl BomkitConfig {
    /// Load `bomkit.toml` from the build root, or return defaults if the file doesn't exist.
    pub fn load(root_dir: &Path) -> miette::Result<Self> {
        let path = root_dir.join(crate::CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!("No {} at {}, using defaults", crate::CONFIG_FILE, root_dir.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| BomkitError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `bomkit.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            BomkitError::Config {
                message: format!("Failed to parse {}: {e}", crate::CONFIG_FILE),
            }
            .into()
        })
    }
}
