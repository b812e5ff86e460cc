// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[tokio::test]
async fn write_then_read_returns_same_blob() {
    let dir = TempDir::new().unwrap();
    let adapter = FileAdapter::new(dir.path().join("backup.json"));
    adapter.write("{\"version\":1}".into()).await.unwrap();
    assert_eq!(adapter.read().await.unwrap(), "{\"version\":1}");
}

#[tokio::test]
async fn write_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("backup.json");
    FileAdapter::new(&path).write("x".into()).await.unwrap();
    assert!(path.is_file());
    assert!(!dir.path().join("nested").join("backup.json.tmp").exists());
}

#[tokio::test]
async fn read_missing_file_is_not_configured() {
    let dir = TempDir::new().unwrap();
    let adapter = FileAdapter::new(dir.path().join("missing.json"));
    assert!(matches!(
        adapter.read().await.unwrap_err(),
        Error::NotConfigured(_)
    ));
}

#[test]
fn file_adapter_is_always_configured() {
    let adapter = FileAdapter::new("backup.json");
    assert!(adapter.is_configured());
    assert!(adapter.describe().contains("backup.json"));
}
