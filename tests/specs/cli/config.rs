// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `config show` and `config set`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn show_defaults() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_seconds = 15"));
}

#[test]
fn set_masks_token() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .args(["config", "set", "gist.token", "ghp_abcdefghijkl1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****1234"))
        .stdout(predicate::str::contains("ghp_").not());

    artisync(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****1234"))
        .stdout(predicate::str::contains("abcdefgh").not());

    let raw = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(raw.contains("ghp_abcdefghijkl1234"));
}

#[parameterized(
    timeout_too_small = { "timeout_seconds", "1" },
    timeout_too_large = { "timeout_seconds", "600" },
    timeout_not_number = { "timeout_seconds", "soon" },
    unknown_platform = { "sync_platform", "dropbox" },
    unknown_key = { "color", "blue" },
)]
fn set_rejects_invalid(key: &str, value: &str) {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .args(["config", "set", key, value])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn set_platform_shows_in_status() {
    let temp = TempDir::new().unwrap();
    artisync(&temp)
        .args(["config", "set", "sync_platform", "gist"])
        .assert()
        .success();

    artisync(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform: gist"));
}

#[test]
fn invalid_config_file_blocks_commands() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "timeout_seconds = 0\n").unwrap();
    artisync(&temp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_seconds"));
}
