// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local persistence for the canonical artifact sequence.
//!
//! The whole ordered sequence is stored as one [`Document`] in
//! `artifacts.json`. Every save writes a temp file, fsyncs it and renames it
//! over the old one, so a crash mid-write leaves the previous state intact.
//!
//! Writers from different processes serialize on an exclusive lock of
//! `artifacts.lock` (see [`LocalStore::lock`]).

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::document::Document;
use crate::error::Result;

const STORE_FILE_NAME: &str = "artifacts.json";
const LOCK_FILE_NAME: &str = "artifacts.lock";

/// File-backed store for the ordered artifact sequence.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
    lock_path: PathBuf,
}

/// Exclusive hold on a data directory's store. Released on drop.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        // Closing the file releases the lock too.
        let _ = FileExt::unlock(&self.file);
    }
}

impl LocalStore {
    /// Opens the store inside `data_dir`, creating the directory if needed.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(LocalStore {
            path: data_dir.join(STORE_FILE_NAME),
            lock_path: data_dir.join(LOCK_FILE_NAME),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Blocks until this process holds the store's exclusive lock.
    ///
    /// Holders must re-read the store after locking; another process may
    /// have written since the last load.
    pub fn lock(&self) -> Result<StoreLock> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)?;
        file.lock_exclusive()?;
        Ok(StoreLock { file })
    }

    /// Reads the stored document.
    ///
    /// Returns an empty document if nothing has been saved yet.
    pub fn load(&self) -> Result<Document> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Document::new(Vec::new()));
            }
            Err(e) => return Err(e.into()),
        };
        if blob.trim().is_empty() {
            return Ok(Document::new(Vec::new()));
        }
        Document::decode(&blob)
    }

    /// Replaces the stored document.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let blob = doc.encode()?;
        write_atomic(&self.path, blob.as_bytes())?;

        tracing::debug!(
            path = %self.path.display(),
            count = doc.artifacts.len(),
            "saved artifacts"
        );
        Ok(())
    }
}

/// Writes `contents` to `path` through a fsynced temp file and a rename.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut file = File::create(&tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
