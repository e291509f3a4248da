//! Apache 2.0 license gate applied before publishing.

use std::path::{Path, PathBuf};

use bomkit_util::errors::BomkitError;

/// License file names, in lookup order.
pub const LICENSE_FILES: [&str; 2] = ["LICENSE.md", "LICENSE"];

/// Find the license of `project_dir`, looking in each directory from the
/// project up to `root_dir`, and require it to be Apache 2.0.
///
/// Returns the license file that was checked.
pub fn ensure_apache_license(project_dir: &Path, root_dir: &Path) -> miette::Result<PathBuf> {
    let Some(file) = bomkit_util::fs::find_file_up_to(project_dir, root_dir, &LICENSE_FILES) else {
        return Err(BomkitError::License {
            message: "LICENSE.md or LICENSE file is missing.".to_string(),
        }
        .into());
    };

    let content = std::fs::read_to_string(&file).map_err(|e| BomkitError::License {
        message: format!("Failed to read {}: {e}", file.display()),
    })?;
    if !is_apache_2(&content) {
        return Err(BomkitError::License {
            message: "The license is not Apache 2.0.".to_string(),
        }
        .into());
    }

    tracing::debug!("Apache 2.0 license found at {}", file.display());
    Ok(file)
}

/// Whether license text names the Apache License, Version 2.0.
pub fn is_apache_2(content: &str) -> bool {
    let lower = content.to_lowercase();
    lower.contains("apache license") && lower.contains("version 2.0")
}
