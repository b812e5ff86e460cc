// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for file export/import and for sync commands without a remote.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn export_writes_enabled_artifacts() {
    let temp = TempDir::new().unwrap();
    add(&temp, "rule", "Kept");
    let hidden = add(&temp, "rule", "Hidden");
    artisync(&temp).args(["disable", &hidden]).assert().success();

    let path = temp.path().join("backup.json");
    artisync(&temp)
        .arg("export")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 artifact to"));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let artifacts = doc["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0]["name"], "Kept");
    assert!(doc["version"].as_u64().unwrap() >= 1);
}

#[test]
fn import_requires_yes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("backup.json");
    artisync(&temp)
        .arg("import")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn import_replaces_local_artifacts() {
    let source = TempDir::new().unwrap();
    add(&source, "rewrite", "One");
    add(&source, "script", "Two");
    let path = source.path().join("backup.json");
    artisync(&source).arg("export").arg(&path).assert().success();

    let target = TempDir::new().unwrap();
    add(&target, "rule", "Local only");
    artisync(&target)
        .arg("import")
        .arg(&path)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 artifacts"));

    assert_eq!(names(&target), vec!["One", "Two"]);
    assert_eq!(ids(&target), ids(&source));
}

#[test]
fn import_corrupt_file_leaves_state() {
    let temp = TempDir::new().unwrap();
    add(&temp, "rule", "Safe");
    let path = temp.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    artisync(&temp)
        .arg("import")
        .arg(&path)
        .arg("-y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not decode"));

    assert_eq!(names(&temp), vec!["Safe"]);
}

#[test]
fn upload_without_remote_fails() {
    let temp = TempDir::new().unwrap();
    add(&temp, "rule", "A");
    artisync(&temp)
        .arg("upload")
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote not configured"));
}

#[test]
fn download_requires_yes() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .arg("download")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn status_reports_counts() {
    let temp = TempDir::new().unwrap();
    add(&temp, "rule", "A");
    let b = add(&temp, "rule", "B");
    artisync(&temp).args(["disable", &b]).assert().success();

    let output = artisync(&temp).args(["status", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["artifacts"], 2);
    assert_eq!(report["enabled"], 1);
    assert_eq!(report["remote_configured"], false);
}
