//! The publication plan of a catalog project.

use std::collections::BTreeMap;
use std::path::PathBuf;

use bomkit_catalog::generate::{CatalogPaths, GENERATE_TASK};
use bomkit_core::config::CatalogSettings;
use bomkit_core::project::BuildProject;

/// Name of the publication every catalog project registers.
pub const PUBLICATION_NAME: &str = "bomCatalog";

pub const CATEGORY_ATTRIBUTE: &str = "org.gradle.category";
pub const USAGE_ATTRIBUTE: &str = "org.gradle.usage";
pub const STATUS_ATTRIBUTE: &str = "org.gradle.status";

/// A file attached to the publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogArtifact {
    pub file: PathBuf,
    pub classifier: Option<String>,
    pub extension: String,
    /// Task that must run before the file exists.
    pub built_by: String,
}

impl CatalogArtifact {
    /// Repository file name: `<artifact>-<version>[-<classifier>].<ext>`.
    pub fn file_name(&self, artifact_id: &str, version: &str) -> String {
        match &self.classifier {
            Some(c) => format!("{artifact_id}-{version}-{c}.{}", self.extension),
            None => format!("{artifact_id}-{version}.{}", self.extension),
        }
    }
}

/// Everything published for one catalog project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPublication {
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    /// Primary artifact first.
    pub artifacts: Vec<CatalogArtifact>,
    pub attributes: BTreeMap<String, String>,
    /// Outgoing configuration carrying the artifacts, `<catalogName>CatalogElements`.
    pub configuration: String,
    /// Software component the publication is built from, `<catalogName>Catalog`.
    pub component: String,
}

impl CatalogPublication {
    /// Plan the publication of `project`: the versioned catalog as primary
    /// artifact, the BOM-relative catalog under the configured classifier.
    pub fn for_project(project: &BuildProject, settings: &CatalogSettings) -> Self {
        let paths = CatalogPaths::for_project(project, settings);
        let artifacts = vec![
            CatalogArtifact {
                file: paths.versioned.clone(),
                classifier: None,
                extension: "toml".to_string(),
                built_by: GENERATE_TASK.to_string(),
            },
            CatalogArtifact {
                file: paths.bom_relative.clone(),
                classifier: Some(settings.classifier.clone()),
                extension: "toml".to_string(),
                built_by: GENERATE_TASK.to_string(),
            },
        ];

        let mut attributes = BTreeMap::new();
        attributes.insert(CATEGORY_ATTRIBUTE.to_string(), "platform".to_string());
        attributes.insert(USAGE_ATTRIBUTE.to_string(), "version-catalog".to_string());

        Self {
            name: PUBLICATION_NAME.to_string(),
            group_id: project.group.clone(),
            artifact_id: project.name.clone(),
            version: project.version.clone(),
            packaging: "pom".to_string(),
            artifacts,
            attributes,
            configuration: format!("{}CatalogElements", paths.name),
            component: format!("{}Catalog", paths.name),
        }
    }

    pub fn primary(&self) -> Option<&CatalogArtifact> {
        self.artifacts.iter().find(|a| a.classifier.is_none())
    }

    /// Distinct tasks the artifacts depend on, in artifact order.
    pub fn built_by(&self) -> Vec<&str> {
        let mut tasks: Vec<&str> = Vec::new();
        for artifact in &self.artifacts {
            if !tasks.contains(&artifact.built_by.as_str()) {
                tasks.push(&artifact.built_by);
            }
        }
        tasks
    }

    /// `release`, or `integration` for snapshot versions.
    pub fn status(&self) -> &'static str {
        if self.version.ends_with("-SNAPSHOT") {
            "integration"
        } else {
            "release"
        }
    }

    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> BuildProject {
        BuildProject {
            path: ":versions:library-bom".to_string(),
            name: "library-bom".to_string(),
            group: "com.sphereon.gradle".to_string(),
            version: "0.1.0".to_string(),
            dir: PathBuf::from("/build/versions/library-bom"),
        }
    }

    #[test]
    fn plan_for_catalog_project() {
        let publication = CatalogPublication::for_project(&project(), &CatalogSettings::default());
        assert_eq!(publication.name, "bomCatalog");
        assert_eq!(publication.packaging, "pom");
        assert_eq!(publication.configuration, "sphereonLibraryBomCatalogElements");
        assert_eq!(publication.component, "sphereonLibraryBomCatalog");
        assert_eq!(publication.attributes[CATEGORY_ATTRIBUTE], "platform");
        assert_eq!(publication.attributes[USAGE_ATTRIBUTE], "version-catalog");

        let primary = publication.primary().unwrap();
        assert!(primary.file.ends_with("build/tomlCatalog/sphereonLibraryBom.versioned.toml"));
        assert_eq!(primary.file_name("library-bom", "0.1.0"), "library-bom-0.1.0.toml");

        let secondary = &publication.artifacts[1];
        assert_eq!(secondary.classifier.as_deref(), Some("bom"));
        assert_eq!(secondary.file_name("library-bom", "0.1.0"), "library-bom-0.1.0-bom.toml");

        assert_eq!(publication.built_by(), vec!["generateTomlCatalog"]);
    }

    #[test]
    fn snapshot_status() {
        let mut p = project();
        p.version = "0.2.0-SNAPSHOT".to_string();
        let publication = CatalogPublication::for_project(&p, &CatalogSettings::default());
        assert_eq!(publication.status(), "integration");
        assert_eq!(publication.coordinate(), "com.sphereon.gradle:library-bom:0.2.0-SNAPSHOT");
    }
}
