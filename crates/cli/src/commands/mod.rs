// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod backup;
pub mod config;
pub mod edit;
pub mod lifecycle;
pub mod list;
pub mod order;
pub mod show;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::future::Future;
use std::path::{Path, PathBuf};

use artisync_core::config::default_data_dir;
use artisync_core::{
    adapter_from_settings, ArtifactRepository, LocalStore, Settings, SyncCoordinator,
};

use crate::env;
use crate::error::{Error, Result};

/// Everything a command needs: where data lives, settings, and the repository.
pub struct Context {
    pub data_dir: PathBuf,
    pub settings: Settings,
    pub repo: ArtifactRepository,
}

impl Context {
    /// A coordinator over this context's repository, using the configured timeout.
    pub fn coordinator(&self) -> SyncCoordinator {
        SyncCoordinator::from_settings(self.repo.clone(), &self.settings)
    }
}

/// Picks the data directory: `--data-dir`, then `ARTISYNC_DIR`, then the platform default.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag.or_else(env::data_dir) {
        return Ok(dir);
    }
    default_data_dir().map_err(|_| Error::NoDataDir)
}

/// Helper to open settings and the repository for `data_dir`.
pub fn open(data_dir: &Path) -> Result<Context> {
    let settings = Settings::load(data_dir)?;
    let remote = adapter_from_settings(&settings)?;
    let store = LocalStore::open(data_dir)?;
    let repo = ArtifactRepository::open(store, remote)?;
    tracing::debug!(data_dir = %data_dir.display(), "opened context");
    Ok(Context {
        data_dir: data_dir.to_path_buf(),
        settings,
        repo,
    })
}

/// Runs `fut` to completion on a single-threaded runtime.
pub fn block_on<F: Future>(fut: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(fut))
}

/// Refuses destructive operations that were not confirmed with `--yes`.
pub fn require_confirmation(yes: bool, operation: &'static str) -> Result<()> {
    if yes {
        Ok(())
    } else {
        Err(Error::ConfirmationRequired { operation })
    }
}
