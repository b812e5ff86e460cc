// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `artisync` pointed at `temp` as its data directory.
pub fn artisync(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("artisync");
    cmd.arg("--data-dir")
        .arg(temp.path())
        .env_remove("ARTISYNC_DIR")
        .env_remove("ARTISYNC_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Adds an artifact and returns its id.
pub fn add(temp: &TempDir, artifact_type: &str, name: &str) -> String {
    add_with_opts(temp, artifact_type, name, &[])
}

pub fn add_with_opts(temp: &TempDir, artifact_type: &str, name: &str, opts: &[&str]) -> String {
    let output = artisync(temp)
        .args(["add", artifact_type, name, "-o", "json"])
        .args(opts)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let artifact: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    artifact["id"].as_str().unwrap().to_string()
}

/// Artifacts as listed by `list -o json`.
pub fn list_json(temp: &TempDir) -> Vec<serde_json::Value> {
    let output = artisync(temp).args(["list", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

pub fn ids(temp: &TempDir) -> Vec<String> {
    list_json(temp)
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn names(temp: &TempDir) -> Vec<String> {
    list_json(temp)
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect()
}
