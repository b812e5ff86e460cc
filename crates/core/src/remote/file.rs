// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manual backup file adapter.
//!
//! Export writes the same document the hosted adapters upload; import reads
//! it back and goes through the regular restore path.

use std::path::{Path, PathBuf};

use super::{RemoteAdapter, RemoteFuture, WriteReceipt};
use crate::error::Error;

/// Reads and writes the document as a plain file.
#[derive(Debug, Clone)]
pub struct FileAdapter {
    path: PathBuf,
}

impl FileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAdapter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RemoteAdapter for FileAdapter {
    fn is_configured(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn read(&self) -> RemoteFuture<'_, String> {
        Box::pin(async move {
            match tokio::fs::read_to_string(&self.path).await {
                Ok(blob) => Ok(blob),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::NotConfigured(
                    format!("backup file {} does not exist", self.path.display()),
                )),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn write(&self, blob: String) -> RemoteFuture<'_, WriteReceipt> {
        Box::pin(async move {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            let mut tmp = self.path.clone().into_os_string();
            tmp.push(".tmp");
            let tmp = PathBuf::from(tmp);

            tokio::fs::write(&tmp, blob.as_bytes()).await?;
            tokio::fs::rename(&tmp, &self.path).await?;
            Ok(WriteReceipt::default())
        })
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
