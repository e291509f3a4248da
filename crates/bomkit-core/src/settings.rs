//! `settings.gradle.kts` scanning: root project name and included projects.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use bomkit_util::errors::BomkitError;

use crate::script::strip_comments;

static ROOT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"rootProject\.name\s*=\s*"([^"]+)""#).expect("Invalid root name regex")
});

static INCLUDE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"include\(([^)]*)\)").expect("Invalid include regex"));

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("Invalid quoted string regex"));

/// The parts of a settings script bomkit cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub root_name: Option<String>,
    /// Included project paths in declaration order, normalised to start with `:`.
    pub includes: Vec<String>,
}

impl Settings {
    /// Read and parse the settings script at `path`.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BomkitError::Settings {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse settings script text.
    ///
    /// `include(":a", ":b")` calls may list several paths; a path given
    /// without a leading colon is treated as root-relative. Including a
    /// nested path also registers each of its parents (`:versions` for
    /// `:versions:common-bom`), ahead of the child. Comments are ignored.
    pub fn parse(content: &str) -> Self {
        let code = strip_comments(content);

        let root_name = ROOT_NAME.captures(&code).map(|c| c[1].to_string());

        let mut includes: Vec<String> = Vec::new();
        for call in INCLUDE_CALL.captures_iter(&code) {
            for quoted in QUOTED.captures_iter(&call[1]) {
                let raw = &quoted[1];
                let path = if raw.starts_with(':') {
                    raw.to_string()
                } else {
                    format!(":{raw}")
                };
                for ancestor in with_parents(&path) {
                    if !includes.contains(&ancestor) {
                        includes.push(ancestor);
                    }
                }
            }
        }

        Self {
            root_name,
            includes,
        }
    }
}

/// `:a:b:c` becomes `[":a", ":a:b", ":a:b:c"]`.
fn with_parents(path: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut current = String::new();
    for segment in path.split(':').filter(|s| !s.is_empty()) {
        current.push(':');
        current.push_str(segment);
        paths.push(current.clone());
    }
    paths
}
