// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-triggered upload and download.
//!
//! The coordinator sits between a front end and the [`ArtifactRepository`].
//! It allows at most one upload and one download at a time (a second call
//! fails with [`Error::AlreadyInProgress`] instead of queueing), publishes
//! a [`SyncStatus`] that front ends can watch, and supports cooperative
//! cancellation.
//!
//! Cancellation is only honoured before the remote call starts. Once a
//! write is on the wire it completes (or fails) on its own; a late cancel
//! is logged and otherwise ignored.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::remote::{FileAdapter, RemoteAdapter};
use crate::repository::ArtifactRepository;

/// The two operation classes that are each limited to one in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Download,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Upload => "upload",
            Operation::Download => "download",
        }
    }
}

/// Observable progress flags and the outcome of the last operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStatus {
    pub uploading: bool,
    pub downloading: bool,
    pub last_upload: Option<DateTime<Utc>>,
    pub last_download: Option<DateTime<Utc>>,
    /// Message of the most recent failure, cleared by the next success.
    pub last_error: Option<String>,
}

/// How a sync call ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Completed {
        /// Artifacts written (upload) or now held locally (download).
        count: usize,
        /// Identifier of a remote document created by this upload.
        created: Option<String>,
    },
    /// Cancelled before any remote call was made.
    Cancelled,
}

/// Cooperative cancellation flag shared between a caller and one operation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
struct Flight {
    active: AtomicBool,
    token: Mutex<Option<CancelToken>>,
}

impl Flight {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn token(&self) -> std::sync::MutexGuard<'_, Option<CancelToken>> {
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

struct CoordinatorInner {
    repo: ArtifactRepository,
    timeout: Duration,
    upload: Flight,
    download: Flight,
    status: watch::Sender<SyncStatus>,
}

impl CoordinatorInner {
    fn flight(&self, op: Operation) -> &Flight {
        match op {
            Operation::Upload => &self.upload,
            Operation::Download => &self.download,
        }
    }
}

/// Holds an operation's slot; releases it and clears the progress flag on drop.
struct FlightGuard<'a> {
    inner: &'a CoordinatorInner,
    op: Operation,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        let flight = self.inner.flight(self.op);
        *flight.token() = None;
        flight.active.store(false, Ordering::SeqCst);
        let op = self.op;
        self.inner.status.send_modify(|s| match op {
            Operation::Upload => s.uploading = false,
            Operation::Download => s.downloading = false,
        });
    }
}

/// Shared handle that runs uploads and downloads for a repository.
#[derive(Clone)]
pub struct SyncCoordinator {
    inner: Arc<CoordinatorInner>,
}

impl SyncCoordinator {
    /// Creates a coordinator whose remote calls give up after `timeout`.
    pub fn new(repo: ArtifactRepository, timeout: Duration) -> Self {
        let (status, _) = watch::channel(SyncStatus::default());
        SyncCoordinator {
            inner: Arc::new(CoordinatorInner {
                repo,
                timeout,
                upload: Flight::default(),
                download: Flight::default(),
                status,
            }),
        }
    }

    pub fn from_settings(repo: ArtifactRepository, settings: &Settings) -> Self {
        Self::new(repo, settings.timeout())
    }

    pub fn repository(&self) -> &ArtifactRepository {
        &self.inner.repo
    }

    /// Current status snapshot.
    pub fn status(&self) -> SyncStatus {
        self.inner.status.borrow().clone()
    }

    /// Receives every status change.
    pub fn watch_status(&self) -> watch::Receiver<SyncStatus> {
        self.inner.status.subscribe()
    }

    /// True when there is something to upload, a configured remote, and no
    /// upload already running.
    pub fn can_upload(&self) -> bool {
        !self.inner.repo.is_empty()
            && self.inner.repo.is_remote_configured()
            && !self.inner.upload.is_active()
    }

    /// True when a download could start.
    ///
    /// Importing a file needs no remote, so `explicit_import` skips that check.
    pub fn can_download(&self, explicit_import: bool) -> bool {
        (explicit_import || self.inner.repo.is_remote_configured())
            && !self.inner.download.is_active()
    }

    fn begin(&self, op: Operation, token: CancelToken) -> Result<FlightGuard<'_>> {
        let flight = self.inner.flight(op);
        if flight
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(op = op.as_str(), "rejected overlapping call");
            return Err(Error::AlreadyInProgress(op.as_str()));
        }
        *flight.token() = Some(token);
        self.inner.status.send_modify(|s| match op {
            Operation::Upload => s.uploading = true,
            Operation::Download => s.downloading = true,
        });
        Ok(FlightGuard {
            inner: &self.inner,
            op,
        })
    }

    fn cancel(&self, op: Operation) -> bool {
        match self.inner.flight(op).token().as_ref() {
            Some(token) => {
                token.cancel();
                tracing::info!(op = op.as_str(), "cancel requested");
                true
            }
            None => false,
        }
    }

    /// Requests cancellation of the running upload. Returns false if none is running.
    pub fn cancel_upload(&self) -> bool {
        self.cancel(Operation::Upload)
    }

    /// Requests cancellation of the running download. Returns false if none is running.
    pub fn cancel_download(&self) -> bool {
        self.cancel(Operation::Download)
    }

    fn record(&self, op: Operation, result: &Result<SyncOutcome>) {
        let now = Utc::now();
        self.inner.status.send_modify(|s| match result {
            Ok(SyncOutcome::Completed { .. }) => {
                match op {
                    Operation::Upload => s.last_upload = Some(now),
                    Operation::Download => s.last_download = Some(now),
                }
                s.last_error = None;
            }
            Ok(SyncOutcome::Cancelled) => {}
            Err(e) => s.last_error = Some(e.to_string()),
        });
    }

    /// Uploads the enabled artifacts to the configured remote.
    pub async fn upload_all(&self) -> Result<SyncOutcome> {
        self.upload_all_with(CancelToken::new()).await
    }

    pub async fn upload_all_with(&self, token: CancelToken) -> Result<SyncOutcome> {
        let _guard = self.begin(Operation::Upload, token.clone())?;
        let result = self.run_upload(&token).await;
        self.record(Operation::Upload, &result);
        result
    }

    async fn run_upload(&self, token: &CancelToken) -> Result<SyncOutcome> {
        if self.inner.repo.is_empty() {
            return Err(Error::Validation("there are no artifacts to upload".into()));
        }
        if token.is_cancelled() {
            tracing::info!("upload cancelled before it started");
            return Ok(SyncOutcome::Cancelled);
        }

        let report = self.inner.repo.sync_all_artifacts(self.inner.timeout).await?;
        if token.is_cancelled() {
            tracing::info!("upload finished despite late cancel");
        }
        tracing::info!(count = report.count, "upload complete");
        Ok(SyncOutcome::Completed {
            count: report.count,
            created: report.receipt.created,
        })
    }

    /// Replaces local artifacts with the remote document, then reloads them.
    pub async fn download_all(&self) -> Result<SyncOutcome> {
        self.download_all_with(CancelToken::new()).await
    }

    pub async fn download_all_with(&self, token: CancelToken) -> Result<SyncOutcome> {
        let _guard = self.begin(Operation::Download, token.clone())?;
        let remote = Arc::clone(self.inner.repo.remote());
        let result = self.run_download(remote.as_ref(), &token).await;
        self.record(Operation::Download, &result);
        result
    }

    /// Replaces local artifacts with a manually exported backup file.
    pub async fn import_file(&self, path: &Path) -> Result<SyncOutcome> {
        let token = CancelToken::new();
        let _guard = self.begin(Operation::Download, token.clone())?;
        let adapter = FileAdapter::new(path);
        let result = self.run_download(&adapter, &token).await;
        self.record(Operation::Download, &result);
        result
    }

    async fn run_download(
        &self,
        adapter: &dyn RemoteAdapter,
        token: &CancelToken,
    ) -> Result<SyncOutcome> {
        if token.is_cancelled() {
            tracing::info!("download cancelled before it started");
            return Ok(SyncOutcome::Cancelled);
        }

        let artifacts = self
            .inner
            .repo
            .restore_and_refresh(adapter, self.inner.timeout)
            .await?;
        if token.is_cancelled() {
            tracing::info!("download finished despite late cancel");
        }
        tracing::info!(count = artifacts.len(), "download complete");
        Ok(SyncOutcome::Completed {
            count: artifacts.len(),
            created: None,
        })
    }

    /// Writes the upload document to a backup file.
    ///
    /// Shares the upload slot, since it produces the same document.
    pub async fn export_file(&self, path: &Path) -> Result<SyncOutcome> {
        let token = CancelToken::new();
        let _guard = self.begin(Operation::Upload, token)?;
        let adapter = FileAdapter::new(path);
        let result = self
            .inner
            .repo
            .sync_to(&adapter, self.inner.timeout)
            .await
            .map(|report| SyncOutcome::Completed {
                count: report.count,
                created: None,
            });
        // A local file is not a remote upload; only failures are recorded.
        if let Err(e) = &result {
            self.inner
                .status
                .send_modify(|s| s.last_error = Some(e.to_string()));
        }
        result
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
