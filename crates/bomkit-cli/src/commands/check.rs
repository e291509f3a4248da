use std::path::PathBuf;

use miette::Result;

use bomkit_ops::ops_check;
use bomkit_util::errors::BomkitError;
use bomkit_util::status::{status, status_warn};

pub fn exec(files: &[PathBuf]) -> Result<()> {
    let reports = ops_check::check(files)?;
    let mut failed = 0;
    for report in &reports {
        if report.is_ok() {
            status("Ok", &report.file.display().to_string());
            continue;
        }
        failed += 1;
        status_warn("Invalid", &report.file.display().to_string());
        for issue in &report.issues {
            println!("  {issue}");
        }
    }

    if failed > 0 {
        return Err(BomkitError::Catalog {
            message: format!("{failed} of {} catalog(s) failed the check", reports.len()),
        }
        .into());
    }
    Ok(())
}
