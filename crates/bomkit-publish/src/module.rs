//! Gradle module metadata (`.module`) for catalog publications.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use bomkit_util::errors::BomkitError;
use bomkit_util::hash::Checksums;

use crate::publication::{CatalogPublication, STATUS_ATTRIBUTE};

pub const FORMAT_VERSION: &str = "1.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetadata {
    pub format_version: String,
    pub component: ModuleComponent,
    pub created_by: BTreeMap<String, CreatedBy>,
    pub variants: Vec<ModuleVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleComponent {
    pub group: String,
    pub module: String,
    pub version: String,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBy {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVariant {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub files: Vec<ModuleFile>,
}

/// A published file as listed in a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFile {
    pub name: String,
    pub url: String,
    pub size: u64,
    pub sha256: String,
    pub sha1: String,
    pub md5: String,
}

impl ModuleFile {
    /// Describe `data`, published under `name` next to the metadata file.
    pub fn new(name: &str, data: &[u8]) -> Self {
        let sums = Checksums::of(data);
        Self {
            name: name.to_string(),
            url: name.to_string(),
            size: data.len() as u64,
            sha256: sums.sha256,
            sha1: sums.sha1,
            md5: sums.md5,
        }
    }
}

impl ModuleMetadata {
    /// One variant, named after the publication's configuration, carrying
    /// the catalog attributes and `files`.
    pub fn new(publication: &CatalogPublication, files: Vec<ModuleFile>) -> Self {
        let mut component_attributes = BTreeMap::new();
        component_attributes.insert(STATUS_ATTRIBUTE.to_string(), publication.status().to_string());

        let mut created_by = BTreeMap::new();
        created_by.insert(
            "bomkit".to_string(),
            CreatedBy {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        );

        Self {
            format_version: FORMAT_VERSION.to_string(),
            component: ModuleComponent {
                group: publication.group_id.clone(),
                module: publication.artifact_id.clone(),
                version: publication.version.clone(),
                attributes: component_attributes,
            },
            created_by,
            variants: vec![ModuleVariant {
                name: publication.configuration.clone(),
                attributes: publication.attributes.clone(),
                files,
            }],
        }
    }

    pub fn to_json(&self) -> miette::Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| BomkitError::Publication {
            message: format!("Failed to serialize module metadata: {e}"),
        })?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            BomkitError::Publication {
                message: format!("Failed to parse module metadata: {e}"),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomkit_core::config::CatalogSettings;
    use bomkit_core::project::BuildProject;
    use std::path::PathBuf;

    #[test]
    fn metadata_describes_catalog_variant() {
        let project = BuildProject {
            path: ":library-bom".to_string(),
            name: "library-bom".to_string(),
            group: "com.sphereon.gradle".to_string(),
            version: "0.1.0".to_string(),
            dir: PathBuf::from("/build/library-bom"),
        };
        let publication = CatalogPublication::for_project(&project, &CatalogSettings::default());
        let file = ModuleFile::new("library-bom-0.1.0.toml", b"[libraries]\n");
        let metadata = ModuleMetadata::new(&publication, vec![file.clone()]);

        let json = metadata.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["formatVersion"], "1.1");
        assert_eq!(value["component"]["module"], "library-bom");
        assert_eq!(value["component"]["attributes"]["org.gradle.status"], "release");
        assert_eq!(value["variants"][0]["name"], "sphereonLibraryBomCatalogElements");
        assert_eq!(value["variants"][0]["attributes"]["org.gradle.usage"], "version-catalog");
        assert_eq!(value["variants"][0]["files"][0]["size"], 12);

        assert_eq!(ModuleMetadata::from_json(&json).unwrap(), metadata);
        assert_eq!(file.sha1.len(), 40);
    }
}
