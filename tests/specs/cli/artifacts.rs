// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for creating, showing, editing and deleting artifacts.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn list_empty_data_dir() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No artifacts."));
}

#[test]
fn add_then_list_shows_numbered_lines() {
    let temp = TempDir::new().unwrap();
    let first = add(&temp, "rewrite", "Strip tracking");
    let second = add(&temp, "script", "Dark mode");

    artisync(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "  1. [rewrite] Strip tracking ({})",
            first
        )))
        .stdout(predicate::str::contains(format!(
            "  2. [script] Dark mode ({})",
            second
        )));
}

#[parameterized(
    rewrite = { "rewrite" },
    redirect = { "redirect" },
    script = { "script" },
    rule = { "rule" },
    filter = { "filter" },
    header = { "header" },
)]
fn add_accepts_every_type(artifact_type: &str) {
    let temp = TempDir::new().unwrap();
    add(&temp, artifact_type, "Thing");
    assert_eq!(list_json(&temp)[0]["type"], artifact_type);
}

#[test]
fn add_rejects_unknown_type() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .args(["add", "macro", "Thing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("macro"));
    assert!(list_json(&temp).is_empty());
}

#[test]
fn add_rejects_blank_name() {
    let temp = TempDir::new().unwrap();
    artisync(&temp).args(["add", "rule", "   "]).assert().failure();
}

#[test]
fn add_reads_content_from_file() {
    let temp = TempDir::new().unwrap();
    let body = temp.path().join("dark.js");
    std::fs::write(&body, "document.body.classList.add('dark');\n").unwrap();

    let id = add_with_opts(
        &temp,
        "script",
        "Dark mode",
        &["--file", body.to_str().unwrap(), "--disabled", "-d", "night theme"],
    );

    let output = artisync(&temp).args(["show", &id, "-o", "json"]).output().unwrap();
    let artifact: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(artifact["content"], "document.body.classList.add('dark');\n");
    assert_eq!(artifact["isEnabled"], false);
    assert_eq!(artifact["description"], "night theme");
}

#[test]
fn add_content_and_file_conflict() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .args(["add", "rule", "X", "--content", "a", "--file", "b"])
        .assert()
        .failure();
}

#[test]
fn show_prints_details() {
    let temp = TempDir::new().unwrap();
    let id = add_with_opts(&temp, "rewrite", "Strip tracking", &["--content", "^a b 302"]);

    artisync(&temp)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("[rewrite] Strip tracking"))
        .stdout(predicate::str::contains(format!("ID: {}", id)))
        .stdout(predicate::str::contains("    ^a b 302"));
}

#[test]
fn show_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .args(["show", "art-nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("artifact not found: art-nope"));
}

#[parameterized(
    name = { "name", "Renamed", "name" },
    title_alias = { "title", "Renamed", "name" },
    description = { "description", "new words", "description" },
    content = { "content", "body", "content" },
)]
fn edit_updates_attribute(attr: &str, value: &str, field: &str) {
    let temp = TempDir::new().unwrap();
    let id = add(&temp, "rule", "Original");

    artisync(&temp)
        .args(["edit", &id, attr, value])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    assert_eq!(list_json(&temp)[0][field], value);
}

#[test]
fn edit_changes_type() {
    let temp = TempDir::new().unwrap();
    let id = add(&temp, "rule", "Original");
    artisync(&temp).args(["edit", &id, "type", "filter"]).assert().success();
    assert_eq!(list_json(&temp)[0]["type"], "filter");
}

#[test]
fn edit_unknown_attribute_fails() {
    let temp = TempDir::new().unwrap();
    let id = add(&temp, "rule", "Original");
    artisync(&temp)
        .args(["edit", &id, "color", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attribute 'color'"));
}

#[test]
fn disable_and_enable_toggle_flag() {
    let temp = TempDir::new().unwrap();
    let a = add(&temp, "rule", "A");
    let b = add(&temp, "rule", "B");

    artisync(&temp).args(["disable", &a, &b]).assert().success();
    assert!(list_json(&temp).iter().all(|x| x["isEnabled"] == false));

    artisync(&temp).args(["enable", &b]).assert().success();
    artisync(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("A (").and(predicate::str::contains("disabled")));
    assert_eq!(list_json(&temp)[1]["isEnabled"], true);
}

#[test]
fn disable_with_unknown_id_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let a = add(&temp, "rule", "A");
    artisync(&temp).args(["disable", &a, "art-missing"]).assert().failure();
    assert_eq!(list_json(&temp)[0]["isEnabled"], true);
}

#[test]
fn duplicate_places_copy_after_original() {
    let temp = TempDir::new().unwrap();
    let a = add(&temp, "rule", "A");
    add(&temp, "rule", "B");

    artisync(&temp).args(["duplicate", &a]).assert().success();
    artisync(&temp).args(["duplicate", &a]).assert().success();

    assert_eq!(names(&temp), vec!["A", "A copy 2", "A copy", "B"]);
}

#[test]
fn delete_removes_artifact() {
    let temp = TempDir::new().unwrap();
    let a = add(&temp, "rule", "A");
    let b = add(&temp, "rule", "B");

    artisync(&temp)
        .args(["delete", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted A ({})", a)));

    assert_eq!(ids(&temp), vec![b]);
    artisync(&temp).args(["delete", &a]).assert().failure();
}

#[test]
fn data_dir_from_environment() {
    let temp = TempDir::new().unwrap();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("artisync");
    cmd.env("ARTISYNC_DIR", temp.path())
        .args(["add", "rule", "From env"])
        .assert()
        .success();

    assert_eq!(names(&temp), vec!["From env"]);
}
