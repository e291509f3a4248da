use bomkit_core::config::ProjectDefaults;
use bomkit_core::project::{BuildModel, UNSPECIFIED_VERSION};
use std::fs;
use tempfile::TempDir;

fn write_build(root: &std::path::Path) {
    fs::write(
        root.join("settings.gradle.kts"),
        "rootProject.name = \"gradle-build-support\"\n\
         include(\":versions:common-bom\")\n\
         include(\":versions:library-bom\")\n",
    )
    .unwrap();
    fs::write(root.join("gradle.properties"), "group=com.sphereon.gradle\nversion=0.1.0\n").unwrap();
    let common = root.join("versions/common-bom");
    let library = root.join("versions/library-bom");
    fs::create_dir_all(&common).unwrap();
    fs::create_dir_all(&library).unwrap();
    fs::write(library.join("gradle.properties"), "version=0.2.0\n").unwrap();
    fs::write(
        library.join("build.gradle.kts"),
        "plugins {\n    id(\"com.sphereon.gradle.toml-catalog\")\n}\n",
    )
    .unwrap();
}

#[test]
fn load_reads_settings_and_properties() {
    let tmp = TempDir::new().unwrap();
    write_build(tmp.path());

    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();
    let paths: Vec<&str> = model.projects().iter().map(|p| p.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![":", ":versions", ":versions:common-bom", ":versions:library-bom"]
    );

    let root = model.project(":").unwrap();
    assert_eq!(root.name, "gradle-build-support");

    let common = model.project(":versions:common-bom").unwrap();
    assert_eq!(common.name, "common-bom");
    assert_eq!(common.group, "com.sphereon.gradle");
    assert_eq!(common.version, "0.1.0");
    assert_eq!(common.dir, tmp.path().join("versions").join("common-bom"));

    let library = model.project(":versions:library-bom").unwrap();
    assert_eq!(library.version, "0.2.0", "project properties override root");
}

#[test]
fn defaults_fill_missing_coordinates() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("settings.gradle.kts"), "include(\":bom\")\n").unwrap();

    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();
    let bom = model.project(":bom").unwrap();
    assert_eq!(bom.group, "");
    assert_eq!(bom.version, UNSPECIFIED_VERSION);

    let defaults = ProjectDefaults {
        group: Some("org.acme".to_string()),
        version: Some("9.0.0".to_string()),
    };
    let model = BuildModel::load(tmp.path(), &defaults).unwrap();
    let bom = model.project(":bom").unwrap();
    assert_eq!(bom.group, "org.acme");
    assert_eq!(bom.version, "9.0.0");
}

#[test]
fn unknown_project_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write_build(tmp.path());
    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();
    let err = model.project(":nope").unwrap_err();
    assert!(err.to_string().contains("':nope' could not be found"), "got: {err}");
}

#[test]
fn resolve_relative_and_absolute_references() {
    let tmp = TempDir::new().unwrap();
    write_build(tmp.path());
    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();
    let root = model.project(":").unwrap();
    let resolved = model.resolve(root, "versions:common-bom").unwrap();
    assert_eq!(resolved.path, ":versions:common-bom");

    let library = model.project(":versions:library-bom").unwrap();
    let resolved = model.resolve(library, ":versions:common-bom").unwrap();
    assert_eq!(resolved.name, "common-bom");
}

#[test]
fn projects_applying_plugin() {
    let tmp = TempDir::new().unwrap();
    write_build(tmp.path());
    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();
    let catalogs = model
        .projects_applying("com.sphereon.gradle.toml-catalog")
        .unwrap();
    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0].path, ":versions:library-bom");

    let common = model.project(":versions:common-bom").unwrap();
    assert!(common.read_build_file().unwrap().is_none());
}

#[test]
fn discover_root_walks_up() {
    let tmp = TempDir::new().unwrap();
    write_build(tmp.path());
    let nested = tmp.path().join("versions/library-bom");
    assert_eq!(BuildModel::discover_root(&nested).unwrap(), tmp.path());

    let empty = TempDir::new().unwrap();
    assert!(BuildModel::discover_root(empty.path()).is_err());
}

#[test]
fn parent_of_nested_include_is_a_project() {
    let tmp = TempDir::new().unwrap();
    write_build(tmp.path());
    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();
    let versions = model.project(":versions").unwrap();
    assert_eq!(versions.name, "versions");
    assert_eq!(versions.dir, tmp.path().join("versions"));
    assert!(!versions
        .applies_plugin("com.sphereon.gradle.toml-catalog")
        .unwrap());
}

#[test]
fn commented_plugin_id_is_not_applied() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("settings.gradle.kts"),
        "include(\":lib\", \":block\", \":real\")\n",
    )
    .unwrap();
    for (dir, script) in [
        ("lib", "plugins {\n    // id(\"com.sphereon.gradle.toml-catalog\")\n    kotlin(\"jvm\")\n}\n"),
        ("block", "/* plugins { id(\"com.sphereon.gradle.toml-catalog\") } */\n"),
        ("real", "plugins {\n    id( \"com.sphereon.gradle.toml-catalog\" ) // catalog\n}\n"),
    ] {
        fs::create_dir_all(tmp.path().join(dir)).unwrap();
        fs::write(tmp.path().join(dir).join("build.gradle.kts"), script).unwrap();
    }
    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();

    let catalogs: Vec<&str> = model
        .projects_applying("com.sphereon.gradle.toml-catalog")
        .unwrap()
        .iter()
        .map(|p| p.path.as_str())
        .collect();
    assert_eq!(catalogs, vec![":real"]);
}

#[test]
fn plugin_id_must_match_exactly() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("settings.gradle.kts"), "include(\":lib\")\n").unwrap();
    fs::create_dir_all(tmp.path().join("lib")).unwrap();
    fs::write(
        tmp.path().join("lib/build.gradle.kts"),
        "plugins { id(\"com.sphereon.gradle.toml-catalog-extra\") }\nval note = \"com.sphereon.gradle.toml-catalog\"\n",
    )
    .unwrap();
    let model = BuildModel::load(tmp.path(), &ProjectDefaults::default()).unwrap();
    assert!(model
        .projects_applying("com.sphereon.gradle.toml-catalog")
        .unwrap()
        .is_empty());
}
