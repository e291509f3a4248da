//! Recursive extraction of a catalog project's declarations.

use std::collections::HashSet;

use bomkit_core::project::{BuildModel, BuildProject};

use crate::accumulate::{Accumulator, Origin, Tags};
use crate::matchers::BuildScript;

/// Walks a catalog project and every platform project it references.
///
/// Each project path is expanded at most once per extractor, so cyclic or
/// diamond-shaped platform graphs terminate.
pub struct Extractor<'a> {
    model: &'a BuildModel,
    plugin_marker: &'a str,
    processed: HashSet<String>,
}

/// What the project being expanded was reached as.
#[derive(Debug, Clone, Copy)]
struct Scope {
    nested: bool,
    plugin_bom: bool,
}

impl<'a> Extractor<'a> {
    pub fn new(model: &'a BuildModel, plugin_marker: &'a str) -> Self {
        Self {
            model,
            plugin_marker,
            processed: HashSet::new(),
        }
    }

    /// Project paths expanded so far.
    pub fn processed(&self) -> &HashSet<String> {
        &self.processed
    }

    /// Record `project` itself, then everything its build script declares.
    ///
    /// Declaration order: the project's own coordinates, its constraints, each
    /// project platform (its coordinates followed by its own expansion), then
    /// its external platforms.
    pub fn extract(&mut self, project: &BuildProject, acc: &mut Accumulator) -> miette::Result<()> {
        self.processed.insert(project.path.clone());
        acc.record(project.coordinate(), Origin::SelfEntry, Tags::NONE);
        self.expand(
            project,
            Scope {
                nested: false,
                plugin_bom: false,
            },
            acc,
        )
    }

    fn expand(
        &mut self,
        project: &BuildProject,
        scope: Scope,
        acc: &mut Accumulator,
    ) -> miette::Result<()> {
        let Some(content) = project.read_build_file()? else {
            tracing::info!(
                "No {} for {}; it contributes no dependencies",
                bomkit_core::BUILD_FILE,
                project.path
            );
            return Ok(());
        };
        let script = BuildScript::parse(&content);

        let (origin, inherited) = if scope.nested {
            let tags = if scope.plugin_bom {
                Tags::platform().with_plugin(true)
            } else {
                Tags::NONE
            };
            (Origin::ProjectPlatform, tags)
        } else {
            (Origin::Direct, Tags::NONE)
        };

        for coordinate in script.constraints {
            acc.record(coordinate, origin, inherited);
        }

        let model = self.model;
        for reference in &script.project_platforms {
            let platform = model.resolve(project, reference)?;
            let plugin_bom = scope.plugin_bom || platform.name.contains(self.plugin_marker);
            let coordinate = platform.coordinate();
            acc.record(
                coordinate.clone(),
                Origin::ProjectPlatform,
                Tags::platform().with_plugin(plugin_bom),
            );
            tracing::info!("Added project platform dependency: {coordinate}");

            if self.processed.insert(platform.path.clone()) {
                tracing::info!("Recursively processing platform project: {}", platform.path);
                self.expand(
                    platform,
                    Scope {
                        nested: true,
                        plugin_bom,
                    },
                    acc,
                )?;
            }
        }

        for coordinate in script.external_platforms {
            tracing::info!("Added external platform dependency: {coordinate}");
            acc.record(
                coordinate,
                Origin::ExternalPlatform,
                Tags::platform().with_plugin(scope.plugin_bom),
            );
        }

        Ok(())
    }
}
