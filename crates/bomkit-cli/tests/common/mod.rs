use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn bomkit_cmd() -> Command {
    Command::cargo_bin("bomkit").unwrap()
}

pub const APACHE: &str = "Apache License\nVersion 2.0, January 2004\n";

/// Write a build with one catalog project referencing one platform project.
pub fn write_build(root: &Path) {
    fs::write(
        root.join("settings.gradle.kts"),
        "rootProject.name = \"catalogs\"\ninclude(\":library-bom\", \":common-bom\")\n",
    )
    .unwrap();
    fs::write(root.join("gradle.properties"), "group=com.sphereon.gradle\nversion=0.1.0\n").unwrap();
    fs::create_dir_all(root.join("library-bom")).unwrap();
    fs::write(
        root.join("library-bom/build.gradle.kts"),
        r#"plugins {
    id("com.sphereon.gradle.toml-catalog")
}

dependencies {
    constraints {
        api(platform(project(":common-bom")))
        api("co.touchlab:kermit:2.0.5")
    }
}
"#,
    )
    .unwrap();
    fs::create_dir_all(root.join("common-bom")).unwrap();
    fs::write(
        root.join("common-bom/build.gradle.kts"),
        "api(\"io.ktor:ktor-io:3.3.0\")\n",
    )
    .unwrap();
}
