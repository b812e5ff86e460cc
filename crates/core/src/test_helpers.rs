// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! In-memory remote adapter and fixtures shared by unit tests.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;

use crate::error::{Error, Result};
use crate::remote::{RemoteAdapter, RemoteFuture, WriteReceipt};
use crate::repository::ArtifactRepository;
use crate::store::LocalStore;

/// Pauses adapter calls until the test releases them.
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// Remote adapter backed by a string in memory.
pub struct MockAdapter {
    blob: Mutex<Option<String>>,
    configured: bool,
    fail_with: Mutex<Option<fn() -> Error>>,
    delay: Option<Duration>,
    gate: Option<Arc<Gate>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl MockAdapter {
    pub fn new() -> Self {
        MockAdapter {
            blob: Mutex::new(None),
            configured: true,
            fail_with: Mutex::new(None),
            delay: None,
            gate: None,
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn holding(blob: &str) -> Self {
        let mock = Self::new();
        *mock.blob.lock().unwrap() = Some(blob.to_string());
        mock
    }

    pub fn unconfigured() -> Self {
        MockAdapter {
            configured: false,
            ..Self::new()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_gate(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Makes every following call fail with `make()`.
    pub fn fail_with(&self, make: fn() -> Error) {
        *self.fail_with.lock().unwrap() = Some(make);
    }

    pub fn recover(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.lock().unwrap().clone()
    }

    pub fn set_blob(&self, blob: &str) {
        *self.blob.lock().unwrap() = Some(blob.to_string());
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    async fn pause(&self) -> Result<()> {
        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match *self.fail_with.lock().unwrap() {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

impl RemoteAdapter for MockAdapter {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }

    fn read(&self) -> RemoteFuture<'_, String> {
        Box::pin(async move {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.pause().await?;
            self.blob()
                .ok_or_else(|| Error::NotConfigured("mock holds no document".into()))
        })
    }

    fn write(&self, blob: String) -> RemoteFuture<'_, WriteReceipt> {
        Box::pin(async move {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.pause().await?;
            *self.blob.lock().unwrap() = Some(blob);
            Ok(WriteReceipt::default())
        })
    }
}

/// Opens a repository in `dir` backed by `remote`.
pub fn open_repo(dir: &Path, remote: Arc<MockAdapter>) -> ArtifactRepository {
    let store = LocalStore::open(dir).unwrap();
    ArtifactRepository::open(store, remote).unwrap()
}
