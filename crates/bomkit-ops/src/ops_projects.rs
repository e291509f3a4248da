//! Operation: list the projects of the build.

use bomkit_core::keys::catalog_name;

use crate::ops_setup::Preflight;

/// One row of `bomkit projects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub path: String,
    pub coordinate: String,
    /// Catalog file stem, for projects applying the catalog plugin.
    pub catalog: Option<String>,
}

/// Every project of the build in settings order.
pub fn projects(pre: &Preflight) -> miette::Result<Vec<ProjectSummary>> {
    let settings = &pre.config.catalog;
    pre.model
        .projects()
        .iter()
        .map(|project| -> miette::Result<ProjectSummary> {
            let catalog = project
                .applies_plugin(&settings.plugin_id)?
                .then(|| catalog_name(&settings.organization, &project.name));
            Ok(ProjectSummary {
                path: project.path.clone(),
                coordinate: project.coordinate().to_string(),
                catalog,
            })
        })
        .collect()
}
