use std::path::PathBuf;

use miette::Result;

use bomkit_ops::ops_publish::{self, PublishOptions};
use bomkit_ops::ops_setup::Preflight;
use bomkit_util::status::{status, status_info};

pub fn exec(pre: &Preflight, project: Option<String>, repo: Option<PathBuf>) -> Result<()> {
    let result = ops_publish::publish(pre, &PublishOptions { project, repo })?;
    for staged in &result.staged {
        status("Published", &staged.coordinate);
    }
    status_info("Repository", &result.repo.display().to_string());
    Ok(())
}
