//! Catalog generation for one project: both variants, written to disk.

use std::path::{Path, PathBuf};

use bomkit_core::config::CatalogSettings;
use bomkit_core::keys::{catalog_name, KeyAlias};
use bomkit_core::project::{BuildModel, BuildProject};
use bomkit_util::errors::BomkitError;

use crate::accumulate::Accumulator;
use crate::conflict::ConflictReport;
use crate::extract::Extractor;
use crate::writer::{CatalogDocument, TargetSection, WriteOptions};

/// Name of the task that produces the catalog files.
pub const GENERATE_TASK: &str = "generateTomlCatalog";

/// Everything a generation run reads: the build and the catalog settings.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub model: &'a BuildModel,
    pub settings: &'a CatalogSettings,
}

/// Where a project's catalog files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    /// File stem, e.g. `sphereonLibraryBom`.
    pub name: String,
    pub output_dir: PathBuf,
    /// `<name>.versioned.toml`: standalone catalog with every version.
    pub versioned: PathBuf,
    /// `<name>.toml`: BOM-relative catalog.
    pub bom_relative: PathBuf,
}

impl CatalogPaths {
    pub fn for_project(project: &BuildProject, settings: &CatalogSettings) -> Self {
        let name = catalog_name(&settings.organization, &project.name);
        let output_dir = project.dir.join(&settings.output_dir);
        Self {
            versioned: output_dir.join(format!("{name}.versioned.toml")),
            bom_relative: output_dir.join(format!("{name}.toml")),
            name,
            output_dir,
        }
    }

    pub fn file(&self, include_versions: bool) -> &Path {
        if include_versions {
            &self.versioned
        } else {
            &self.bom_relative
        }
    }
}

/// Result of generating both catalog variants for a project.
#[derive(Debug, Clone)]
pub struct GeneratedCatalog {
    pub project_path: String,
    pub paths: CatalogPaths,
    pub conflicts: ConflictReport,
}

/// Extract `project` from scratch and render one catalog variant.
///
/// Each call starts from empty state, so repeated calls over unchanged input
/// render identical text.
pub fn render_variant(
    ctx: GenerationContext<'_>,
    project: &BuildProject,
    include_versions: bool,
) -> miette::Result<(String, ConflictReport)> {
    let mut acc = Accumulator::new(&project.version);
    Extractor::new(ctx.model, &ctx.settings.plugin_marker).extract(project, &mut acc)?;

    let alias = KeyAlias::from_settings(ctx.settings);
    let opts = WriteOptions {
        include_versions,
        target: TargetSection::for_project(&project.name, &ctx.settings.plugin_marker),
        self_id: project.id(),
        bom_suffix: &ctx.settings.bom_suffix,
        alias: &alias,
    };
    let text = CatalogDocument::build(&acc, &opts).to_string();
    Ok((text, acc.into_conflicts()))
}

/// Render one variant and write it to its file in the output directory.
pub fn generate_variant(
    ctx: GenerationContext<'_>,
    project: &BuildProject,
    include_versions: bool,
) -> miette::Result<(PathBuf, ConflictReport)> {
    let paths = CatalogPaths::for_project(project, ctx.settings);
    let file = paths.file(include_versions).to_path_buf();
    tracing::info!(
        "Generating TOML catalog for {} at {} (includeVersions={include_versions})",
        project.name,
        file.display()
    );

    let (text, conflicts) = render_variant(ctx, project, include_versions)?;
    bomkit_util::fs::write_atomic(&file, text.as_bytes()).map_err(|e| BomkitError::Catalog {
        message: format!("Failed to write {}: {e}", file.display()),
    })?;

    tracing::info!(
        "Generated TOML catalog for {} at {} (includeVersions={include_versions})",
        project.name,
        file.display()
    );
    Ok((file, conflicts))
}

/// Generate the versioned catalog, then the BOM-relative one.
pub fn generate(ctx: GenerationContext<'_>, project: &BuildProject) -> miette::Result<GeneratedCatalog> {
    let (_, conflicts) = generate_variant(ctx, project, true)?;
    generate_variant(ctx, project, false)?;
    Ok(GeneratedCatalog {
        project_path: project.path.clone(),
        paths: CatalogPaths::for_project(project, ctx.settings),
        conflicts,
    })
}
