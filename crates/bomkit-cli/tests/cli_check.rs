mod common;

use common::{bomkit_cmd, write_build};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_check_generated_catalogs() {
    let tmp = TempDir::new().unwrap();
    write_build(tmp.path());
    bomkit_cmd()
        .current_dir(tmp.path())
        .args(["generate"])
        .assert()
        .success();

    let out = tmp.path().join("library-bom/build/tomlCatalog");
    bomkit_cmd()
        .args(["check"])
        .arg(out.join("sphereonLibraryBom.versioned.toml"))
        .arg(out.join("sphereonLibraryBom.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Ok"));
}

#[test]
fn test_check_reports_dangling_reference() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("broken.toml");
    fs::write(
        &file,
        "[libraries]\nfoo = { module = \"org.example:foo\", version.ref = \"org-example-foo\" }\n",
    )
    .unwrap();

    bomkit_cmd()
        .args(["check"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("org-example-foo"));
}

#[test]
fn test_check_requires_files() {
    bomkit_cmd().args(["check"]).assert().failure();
}
