//! Build script matchers.
//!
//! Three independent patterns over `build.gradle.kts` text:
//!
//! - a dependency constraint, `api("group:artifact:version")`
//! - an in-build platform, `api(platform(project(":path")))`
//! - an external platform, `api(platform("group:artifact:version"))`
//!
//! The patterns are mutually exclusive: a constraint's argument starts with a
//! quote, a platform's with `platform(`. Declarations whose notation does not
//! parse are skipped rather than partially matched.

use regex::Regex;
use std::sync::LazyLock;

use bomkit_core::dependency::Coordinate;
use bomkit_core::script::strip_comments;

static CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bapi\(\s*"([^"]+)"\s*\)"#).expect("Invalid constraint regex")
});

static PROJECT_PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bapi\(\s*platform\(\s*project\(\s*"([^"]+)"\s*\)\s*\)\s*\)"#)
        .expect("Invalid project platform regex")
});

static EXTERNAL_PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bapi\(\s*platform\(\s*"([^"]+)"\s*\)\s*\)"#)
        .expect("Invalid external platform regex")
});

/// The declarations of one build script, each list in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildScript {
    pub constraints: Vec<Coordinate>,
    pub project_platforms: Vec<String>,
    pub external_platforms: Vec<Coordinate>,
}

impl BuildScript {
    /// Scan build script text. Comments are removed first.
    pub fn parse(content: &str) -> Self {
        let code = strip_comments(content);
        Self {
            constraints: constraints(&code),
            project_platforms: project_platforms(&code),
            external_platforms: external_platforms(&code),
        }
    }
}

/// `api("…")` constraints.
pub fn constraints(code: &str) -> Vec<Coordinate> {
    coordinates(&CONSTRAINT, code)
}

/// Paths referenced by `api(platform(project("…")))`.
pub fn project_platforms(code: &str) -> Vec<String> {
    PROJECT_PLATFORM
        .captures_iter(code)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// `api(platform("…"))` references to published BOMs.
pub fn external_platforms(code: &str) -> Vec<Coordinate> {
    coordinates(&EXTERNAL_PLATFORM, code)
}

fn coordinates(pattern: &Regex, code: &str) -> Vec<Coordinate> {
    pattern
        .captures_iter(code)
        .filter_map(|caps| {
            let notation = &caps[1];
            let parsed = Coordinate::parse(notation);
            if parsed.is_none() {
                tracing::debug!("Skipping unparseable dependency notation \"{notation}\"");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_forms() {
        let found = constraints(
            r#"
        api("org.jetbrains.kotlin:kotlin-stdlib:2.2.21")
        api("org.jetbrains.kotlin.jvm:2.2.20")
        api("org.example::1.0.0")
        api( "io.ktor:ktor-io:3.3.0" )
"#,
        );
        assert_eq!(
            found,
            vec![
                Coordinate::new("org.jetbrains.kotlin", "kotlin-stdlib", "2.2.21"),
                Coordinate::new("org.jetbrains.kotlin", "jvm", "2.2.20"),
                Coordinate::new("org", "example", "1.0.0"),
                Coordinate::new("io.ktor", "ktor-io", "3.3.0"),
            ]
        );
    }

    #[test]
    fn patterns_are_mutually_exclusive() {
        let code = r#"
        api(platform(project(":versions:common-bom")))
        api(platform("com.azure:azure-sdk-bom:1.3.0"))
        api("co.touchlab:kermit:2.0.5")
"#;
        assert_eq!(constraints(code), vec![Coordinate::new("co.touchlab", "kermit", "2.0.5")]);
        assert_eq!(project_platforms(code), vec![":versions:common-bom"]);
        assert_eq!(
            external_platforms(code),
            vec![Coordinate::new("com.azure", "azure-sdk-bom", "1.3.0")]
        );
    }

    #[test]
    fn malformed_notation_is_not_matched() {
        let code = r#"
        api("not-a-coordinate")
        api("a:b:c:d")
        api(libs.kotlin.stdlib)
        implementation("org.example:foo:1.0")
        myapi("org.example:bar:1.0")
"#;
        assert!(constraints(code).is_empty());
    }

    #[test]
    fn comments_are_ignored() {
        let script = BuildScript::parse(
            r#"
// api("org.example:commented:1.0")
/*
api(platform(project(":old")))
*/
api("org.example:kept:1.0") // trailing note
val url = "https://example.com/*not-a-comment*/"
"#,
        );
        assert_eq!(script.constraints, vec![Coordinate::new("org.example", "kept", "1.0")]);
        assert!(script.project_platforms.is_empty());
    }
}
