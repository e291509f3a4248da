//! Operation: verify generated catalog files.

use std::path::{Path, PathBuf};

use bomkit_core::version_catalog::CatalogFile;
use bomkit_util::errors::BomkitError;

/// Problems found in one catalog file.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub file: PathBuf,
    pub issues: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check each file. A file that does not parse (including one with a
/// duplicate key) is reported with the parse error as its only issue.
pub fn check(files: &[PathBuf]) -> miette::Result<Vec<CheckReport>> {
    files.iter().map(|file| check_file(file)).collect()
}

fn check_file(file: &Path) -> miette::Result<CheckReport> {
    let content = std::fs::read_to_string(file).map_err(|e| BomkitError::Catalog {
        message: format!("Failed to read {}: {e}", file.display()),
    })?;
    let issues = match CatalogFile::from_str(&content) {
        Ok(catalog) => catalog.check().iter().map(ToString::to_string).collect(),
        Err(e) => vec![e.message().to_string()],
    };
    Ok(CheckReport {
        file: file.to_path_buf(),
        issues,
    })
}
