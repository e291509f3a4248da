use miette::Result;

use bomkit_ops::ops_generate::{self, GenerateOptions};
use bomkit_ops::ops_setup::Preflight;
use bomkit_util::status::{status, status_info, status_warn};

pub fn exec(pre: &Preflight, project: Option<String>) -> Result<()> {
    let generated = ops_generate::generate(pre, &GenerateOptions { project })?;
    if generated.is_empty() {
        status_info(
            "Skipped",
            &format!("no project applies {}", pre.config.catalog.plugin_id),
        );
        return Ok(());
    }

    for catalog in &generated {
        for file in [&catalog.paths.versioned, &catalog.paths.bom_relative] {
            status("Generated", &file.display().to_string());
        }
        for conflict in &catalog.conflicts.conflicts {
            status_warn("Conflict", &conflict.to_string());
        }
    }
    Ok(())
}
