use bomkit_util::fs::{ensure_dir, find_ancestor_with, find_file_up_to, write_atomic};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("settings.gradle.kts"), "").unwrap();
    let nested = tmp.path().join("versions").join("common-bom");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "settings.gradle.kts");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_find_file_up_to_prefers_nearest_level() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("versions").join("library-bom");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(tmp.path().join("LICENSE"), "root").unwrap();
    std::fs::write(project.join("LICENSE"), "project").unwrap();

    let found = find_file_up_to(&project, tmp.path(), &["LICENSE.md", "LICENSE"]).unwrap();
    assert_eq!(found, project.join("LICENSE"));
}

#[test]
fn test_find_file_up_to_checks_names_in_order() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("LICENSE"), "plain").unwrap();
    std::fs::write(tmp.path().join("LICENSE.md"), "markdown").unwrap();

    let found = find_file_up_to(tmp.path(), tmp.path(), &["LICENSE.md", "LICENSE"]).unwrap();
    assert_eq!(found, tmp.path().join("LICENSE.md"));
}

#[test]
fn test_find_file_up_to_stops_at_boundary() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("build-root");
    let project = root.join("versions");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(tmp.path().join("LICENSE"), "outside").unwrap();

    assert_eq!(find_file_up_to(&project, &root, &["LICENSE"]), None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("x").join("y").join("z");
    assert!(!deep.exists());
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn test_write_atomic_creates_parent_and_replaces() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("build").join("tomlCatalog").join("a.toml");
    write_atomic(&target, b"first").unwrap();
    write_atomic(&target, b"second").unwrap();
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");

    let leftovers = std::fs::read_dir(target.parent().unwrap()).unwrap().count();
    assert_eq!(leftovers, 1);
}
