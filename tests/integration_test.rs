//! CLI integration tests for version-bump
//!
//! Every test runs the binary inside a fresh temporary directory holding a
//! `composer.json` and an empty `versionbump.toml`, so neither the user's
//! configuration nor a surrounding git repository leaks in.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the version-bump binary
fn bump_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("version-bump"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn setup_project(manifest: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("composer.json"), manifest).unwrap();
    fs::write(dir.path().join("versionbump.toml"), "").unwrap();
    dir
}

fn manifest_version(dir: &TempDir) -> String {
    let raw = fs::read_to_string(dir.path().join("composer.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    doc["version"].as_str().unwrap().to_string()
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    bump_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("version-bump"))
        .stdout(predicate::str::contains("--no-git"));
}

#[test]
fn test_show_current_version() {
    let dir = setup_project(r#"{"name": "acme/pkg", "version": "1.4.2"}"#);
    bump_cmd(dir.path())
        .arg("--show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: 1.4.2"));
}

#[test]
fn test_patch_updates_manifest() {
    let dir = setup_project(r#"{"name": "acme/pkg", "version": "1.2.3"}"#);
    bump_cmd(dir.path())
        .args(["patch", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version updated to: 1.2.4"))
        .stdout(predicate::str::contains("Skipping Git operations"));
    assert_eq!(manifest_version(&dir), "1.2.4");
}

#[test]
fn test_manifest_written_with_four_space_indent() {
    let dir = setup_project("{\"name\": \"acme/pkg\", \"version\": \"0.9.0\"}\n");
    bump_cmd(dir.path())
        .args(["minor", "--no-git"])
        .assert()
        .success();
    let raw = fs::read_to_string(dir.path().join("composer.json")).unwrap();
    assert_eq!(
        raw,
        "{\n    \"name\": \"acme/pkg\",\n    \"version\": \"0.10.0\"\n}\n"
    );
}

#[test]
fn test_prepatch_then_prerelease() {
    let dir = setup_project(r#"{"version": "1.0.0"}"#);
    bump_cmd(dir.path())
        .args(["prepatch", "--no-git"])
        .assert()
        .success();
    assert_eq!(manifest_version(&dir), "1.0.1-beta.0");

    bump_cmd(dir.path())
        .args(["prerelease", "--no-git"])
        .assert()
        .success();
    assert_eq!(manifest_version(&dir), "1.0.1-beta.1");
}

#[test]
fn test_preid_flag() {
    let dir = setup_project(r#"{"version": "2.5.7"}"#);
    bump_cmd(dir.path())
        .args(["premajor", "--preid", "rc", "--no-git"])
        .assert()
        .success();
    assert_eq!(manifest_version(&dir), "3.0.0-rc.0");
}

#[test]
fn test_missing_version_defaults() {
    let dir = setup_project(r#"{"name": "acme/pkg"}"#);
    bump_cmd(dir.path())
        .args(["major", "--no-git"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No version field"));
    assert_eq!(manifest_version(&dir), "2.0.0");
}

#[test]
fn test_literal_version() {
    let dir = setup_project(r#"{"version": "1.0.0"}"#);
    bump_cmd(dir.path())
        .args(["2.3.4", "--no-git"])
        .assert()
        .success();
    assert_eq!(manifest_version(&dir), "2.3.4");
}

#[test]
fn test_malformed_version_fails() {
    let original = r#"{"version": "abc"}"#;
    let dir = setup_project(original);
    bump_cmd(dir.path())
        .args(["patch", "--no-git"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Malformed version: 'abc'"));
    assert_eq!(
        fs::read_to_string(dir.path().join("composer.json")).unwrap(),
        original
    );
}

#[test]
fn test_unknown_bump_type_fails() {
    let dir = setup_project(r#"{"version": "1.0.0"}"#);
    bump_cmd(dir.path())
        .args(["sidegrade", "--no-git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown bump type: 'sidegrade'"));
    assert_eq!(manifest_version(&dir), "1.0.0");
}

#[test]
fn test_missing_type_fails() {
    let dir = setup_project(r#"{"version": "1.0.0"}"#);
    bump_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please specify a version type"));
}

#[test]
fn test_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("versionbump.toml"), "").unwrap();
    bump_cmd(dir.path())
        .arg("patch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest error"));
}

#[test]
fn test_dry_run_leaves_manifest() {
    let dir = setup_project(r#"{"version": "1.0.0"}"#);
    bump_cmd(dir.path())
        .args(["minor", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1.0"));
    assert_eq!(manifest_version(&dir), "1.0.0");
}

#[test]
fn test_custom_manifest_path() {
    let dir = setup_project("{}");
    fs::write(dir.path().join("package.json"), r#"{"version": "0.1.0"}"#).unwrap();
    bump_cmd(dir.path())
        .args(["patch", "--manifest", "package.json", "--no-git"])
        .assert()
        .success();
    let raw = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(raw.contains("\"version\": \"0.1.1\""));
}

#[test]
fn test_outside_repository_still_bumps() {
    let dir = setup_project(r#"{"version": "1.0.0"}"#);
    bump_cmd(dir.path())
        .arg("patch")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("not inside a git repository")
                .or(predicate::str::contains("Git is not available")),
        );
    assert_eq!(manifest_version(&dir), "1.0.1");
}

#[test]
fn test_invalid_config_fails() {
    let dir = setup_project(r#"{"version": "1.0.0"}"#);
    fs::write(
        dir.path().join("versionbump.toml"),
        "[git]\ntag_pattern = \"release\"\n",
    )
    .unwrap();
    bump_cmd(dir.path())
        .arg("patch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading config"));
}
