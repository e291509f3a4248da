//! Operation: generate TOML catalogs.

use bomkit_catalog::GeneratedCatalog;

use crate::ops_setup::Preflight;

/// Options for `bomkit generate`.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Generate only this project (colon path) instead of every catalog project.
    pub project: Option<String>,
}

/// Generate both catalog variants for each selected catalog project.
///
/// Each project is generated from fresh state; nothing carries over between
/// projects.
pub fn generate(pre: &Preflight, opts: &GenerateOptions) -> miette::Result<Vec<GeneratedCatalog>> {
    let ctx = pre.context();
    pre.catalog_projects(opts.project.as_deref())?
        .into_iter()
        .map(|project| bomkit_catalog::generate(ctx, project))
        .collect()
}
