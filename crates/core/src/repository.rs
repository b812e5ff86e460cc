// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The artifact repository.
//!
//! Owns the canonical ordered artifact sequence. Every mutation goes through
//! one lock, is written to the [`LocalStore`] first, and only then replaces
//! the cached sequence, so a failed write never leaves the cache ahead of
//! disk. Callers only ever receive owned copies.
//!
//! Mutations also hold the store's file lock and start from a fresh read of
//! the store, so repositories in other processes sharing the data directory
//! never overwrite each other's changes.
//!
//! Remote calls are the only suspension points. No lock is held across an
//! `.await`: a restore reads and decodes the remote document first, then
//! takes the lock and swaps the whole sequence in one step.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::broadcast;

use crate::artifact::{copy_name, Artifact, ArtifactType};
use crate::document::{Document, VERSION};
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::remote::{RemoteAdapter, RemoteFuture, WriteReceipt};
use crate::store::{LocalStore, StoreLock};

const EVENT_CAPACITY: usize = 64;

/// Change notifications published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryEvent {
    /// An artifact was inserted (`created`) or replaced in place.
    Saved { id: String, created: bool },
    /// An artifact was removed.
    Deleted { id: String },
    /// The order changed; membership did not.
    Reordered,
    /// The cache was reloaded from the local store.
    Refreshed { count: usize },
    /// The whole sequence was replaced from a remote document.
    Restored { count: usize },
    /// The enabled subset was written to a remote.
    Synced { count: usize },
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of (enabled) artifacts written.
    pub count: usize,
    pub receipt: WriteReceipt,
}

struct State {
    artifacts: Vec<Artifact>,
    /// Document version last read, kept so newer writers' data is not downgraded.
    version: u32,
    /// Top-level document fields this build does not understand.
    extra: Map<String, Value>,
}

struct RepositoryInner {
    state: Mutex<State>,
    store: LocalStore,
    remote: Arc<dyn RemoteAdapter>,
    events: broadcast::Sender<RepositoryEvent>,
}

/// Shared handle to the canonical artifact sequence.
///
/// Cloning the handle shares the same state.
#[derive(Clone)]
pub struct ArtifactRepository {
    inner: Arc<RepositoryInner>,
}

impl ArtifactRepository {
    /// Opens the repository, loading the current sequence from `store`.
    pub fn open(store: LocalStore, remote: Arc<dyn RemoteAdapter>) -> Result<Self> {
        let doc = store.load()?;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        tracing::debug!(count = doc.artifacts.len(), "opened artifact repository");

        Ok(ArtifactRepository {
            inner: Arc::new(RepositoryInner {
                state: Mutex::new(State {
                    artifacts: doc.artifacts,
                    version: doc.version,
                    extra: doc.extra,
                }),
                store,
                remote,
                events,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, event: RepositoryEvent) {
        // No subscribers is fine.
        let _ = self.inner.events.send(event);
    }

    fn document(state: &State, artifacts: Vec<Artifact>) -> Document {
        let mut doc = Document::new(artifacts).with_extra(state.extra.clone());
        doc.version = state.version.max(VERSION);
        doc
    }

    /// Takes both locks and brings the cache up to date with the store.
    ///
    /// Every mutation starts here; the returned guards must outlive the
    /// matching [`commit`](Self::commit).
    fn begin_write(&self) -> Result<(MutexGuard<'_, State>, StoreLock)> {
        let mut state = self.lock();
        let store_lock = self.inner.store.lock()?;
        self.reload_locked(&mut state)?;
        Ok((state, store_lock))
    }

    /// Persists `artifacts` and, only if that succeeds, makes them canonical.
    fn commit(&self, state: &mut State, artifacts: Vec<Artifact>) -> Result<()> {
        let doc = Self::document(state, artifacts);
        self.inner.store.save(&doc)?;
        state.artifacts = doc.artifacts;
        Ok(())
    }

    /// Subscribes to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<RepositoryEvent> {
        self.inner.events.subscribe()
    }

    /// The remote adapter uploads and restores go through.
    pub fn remote(&self) -> &Arc<dyn RemoteAdapter> {
        &self.inner.remote
    }

    /// Returns true if the remote adapter has what it needs to be called.
    pub fn is_remote_configured(&self) -> bool {
        self.inner.remote.is_configured()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns a copy of the canonical sequence. Never fails.
    pub fn get_all(&self) -> Vec<Artifact> {
        self.lock().artifacts.clone()
    }

    /// Returns a copy of one artifact.
    pub fn get(&self, id: &str) -> Result<Artifact> {
        self.lock()
            .artifacts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.lock().artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().artifacts.is_empty()
    }

    /// Reloads the sequence from the local store, replacing the cache.
    pub fn fetch_all(&self) -> Result<Vec<Artifact>> {
        let artifacts = {
            let mut state = self.lock();
            self.reload_locked(&mut state)?
        };
        self.emit(RepositoryEvent::Refreshed {
            count: artifacts.len(),
        });
        Ok(artifacts)
    }

    fn reload_locked(&self, state: &mut State) -> Result<Vec<Artifact>> {
        let doc = self.inner.store.load()?;
        state.artifacts = doc.artifacts;
        state.version = doc.version;
        state.extra = doc.extra;
        Ok(state.artifacts.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Local mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Inserts or replaces an artifact by id.
    ///
    /// A new id is appended to the end; an existing id keeps its position,
    /// its original `created_at` and any stored fields `artifact` does not
    /// carry. `updated_at` is set to now.
    pub fn save(&self, mut artifact: Artifact) -> Result<Artifact> {
        artifact.validate()?;
        artifact.touch(Utc::now());

        let created = {
            let (mut state, _store_lock) = self.begin_write()?;
            let mut next = state.artifacts.clone();
            let created = match next.iter().position(|a| a.id == artifact.id) {
                Some(idx) => {
                    artifact.created_at = next[idx].created_at;
                    for (key, value) in &next[idx].extra {
                        artifact
                            .extra
                            .entry(key.clone())
                            .or_insert_with(|| value.clone());
                    }
                    next[idx] = artifact.clone();
                    false
                }
                None => {
                    next.push(artifact.clone());
                    true
                }
            };
            self.commit(&mut state, next)?;
            created
        };

        tracing::debug!(id = %artifact.id, created, "saved artifact");
        self.emit(RepositoryEvent::Saved {
            id: artifact.id.clone(),
            created,
        });
        Ok(artifact)
    }

    /// Creates and appends a new artifact with a generated id.
    pub fn create(
        &self,
        name: &str,
        artifact_type: ArtifactType,
        content: &str,
    ) -> Result<Artifact> {
        let now = Utc::now();
        let id = {
            let state = self.lock();
            generate_unique_id(name, &now, |candidate| {
                state.artifacts.iter().any(|a| a.id == candidate)
            })
        };
        let artifact = Artifact::new(
            id,
            name.trim().to_string(),
            artifact_type,
            content.to_string(),
            now,
        );
        self.save(artifact)
    }

    /// Copies an artifact under a new id and derived name, right after the original.
    pub fn duplicate(&self, id: &str) -> Result<Artifact> {
        let now = Utc::now();
        let copy = {
            let (mut state, _store_lock) = self.begin_write()?;
            let idx = state
                .artifacts
                .iter()
                .position(|a| a.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;

            let original = &state.artifacts[idx];
            let new_id = generate_unique_id(&original.name, &now, |candidate| {
                state.artifacts.iter().any(|a| a.id == candidate)
            });
            let new_name = copy_name(
                &original.name,
                state.artifacts.iter().map(|a| a.name.as_str()),
            );
            let copy = original.duplicate_as(new_id, new_name, now);

            let mut next = state.artifacts.clone();
            next.insert(idx + 1, copy.clone());
            self.commit(&mut state, next)?;
            copy
        };

        tracing::debug!(from = id, id = %copy.id, "duplicated artifact");
        self.emit(RepositoryEvent::Saved {
            id: copy.id.clone(),
            created: true,
        });
        Ok(copy)
    }

    /// Enables or disables an artifact.
    pub fn set_enabled(&self, id: &str, enabled: bool) -> Result<Artifact> {
        let mut artifact = self.get(id)?;
        if artifact.is_enabled == enabled {
            return Ok(artifact);
        }
        artifact.is_enabled = enabled;
        self.save(artifact)
    }

    /// Removes an artifact; the remaining order closes up.
    pub fn delete(&self, id: &str) -> Result<()> {
        {
            let (mut state, _store_lock) = self.begin_write()?;
            if !state.artifacts.iter().any(|a| a.id == id) {
                return Err(Error::NotFound(id.to_string()));
            }
            let next: Vec<Artifact> = state
                .artifacts
                .iter()
                .filter(|a| a.id != id)
                .cloned()
                .collect();
            self.commit(&mut state, next)?;
        }

        tracing::debug!(id, "deleted artifact");
        self.emit(RepositoryEvent::Deleted { id: id.to_string() });
        Ok(())
    }

    /// Replaces the order with `new_order`.
    ///
    /// `new_order` must name every current id exactly once. Anything else
    /// fails with [`Error::OrderMismatch`] and the old order stays in place.
    pub fn reorder<S: AsRef<str>>(&self, new_order: &[S]) -> Result<()> {
        self.reorder_with(|_| {
            Ok(new_order
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect())
        })
    }

    /// Moves one artifact to `to_index`, shifting the others.
    pub fn move_artifact(&self, id: &str, to_index: usize) -> Result<()> {
        self.reorder_with(|current| {
            let mut ids: Vec<String> = current.iter().map(|a| a.id.clone()).collect();
            let from = ids
                .iter()
                .position(|i| i == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            if to_index >= ids.len() {
                return Err(Error::Validation(format!(
                    "position {} is out of range (0..{})",
                    to_index,
                    ids.len()
                )));
            }
            let moved = ids.remove(from);
            ids.insert(to_index, moved);
            Ok(ids)
        })
    }

    /// Applies the order `plan` computes from the current sequence.
    fn reorder_with<F>(&self, plan: F) -> Result<()>
    where
        F: FnOnce(&[Artifact]) -> Result<Vec<String>>,
    {
        let count = {
            let (mut state, _store_lock) = self.begin_write()?;
            let order = plan(state.artifacts.as_slice())?;
            let next = permute(&state.artifacts, &order)?;
            let unchanged = next
                .iter()
                .zip(state.artifacts.iter())
                .all(|(a, b)| a.id == b.id);
            if unchanged {
                return Ok(());
            }
            self.commit(&mut state, next)?;
            order.len()
        };

        tracing::debug!(count, "reordered artifacts");
        self.emit(RepositoryEvent::Reordered);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Remote
    // ─────────────────────────────────────────────────────────────────────────

    /// Builds the upload document: enabled artifacts in canonical order.
    pub fn export_document(&self) -> Document {
        let state = self.lock();
        let enabled = state
            .artifacts
            .iter()
            .filter(|a| a.is_enabled)
            .cloned()
            .collect();
        Self::document(&state, enabled).exported(Utc::now())
    }

    /// Writes the enabled subset to the configured remote (last writer wins).
    pub async fn sync_all_artifacts(&self, timeout: Duration) -> Result<SyncReport> {
        let remote = Arc::clone(&self.inner.remote);
        self.sync_to(remote.as_ref(), timeout).await
    }

    /// Writes the enabled subset to `adapter`.
    pub async fn sync_to(
        &self,
        adapter: &dyn RemoteAdapter,
        timeout: Duration,
    ) -> Result<SyncReport> {
        let doc = self.export_document();
        let count = doc.artifacts.len();
        let blob = doc.encode()?;

        tracing::info!(remote = %adapter.describe(), count, "uploading artifacts");
        let receipt = with_timeout(timeout, adapter.write(blob)).await?;

        self.emit(RepositoryEvent::Synced { count });
        Ok(SyncReport { count, receipt })
    }

    /// Replaces the whole local sequence with the configured remote's document.
    ///
    /// This overwrites local state; front ends must confirm before calling it.
    pub async fn restore_artifacts(&self, timeout: Duration) -> Result<usize> {
        let remote = Arc::clone(&self.inner.remote);
        self.restore_from(remote.as_ref(), timeout).await
    }

    /// Replaces the whole local sequence with `adapter`'s document.
    pub async fn restore_from(
        &self,
        adapter: &dyn RemoteAdapter,
        timeout: Duration,
    ) -> Result<usize> {
        tracing::info!(remote = %adapter.describe(), "restoring artifacts");
        let blob = with_timeout(timeout, adapter.read()).await?;
        self.restore_from_blob(&blob)
    }

    /// Restores from `adapter`, then reloads from the local store, without
    /// letting any other mutation in between.
    pub async fn restore_and_refresh(
        &self,
        adapter: &dyn RemoteAdapter,
        timeout: Duration,
    ) -> Result<Vec<Artifact>> {
        tracing::info!(remote = %adapter.describe(), "restoring artifacts");
        let blob = with_timeout(timeout, adapter.read()).await?;
        let doc = decode_for_restore(&blob)?;
        let count = doc.artifacts.len();

        let artifacts = {
            let mut state = self.lock();
            let _store_lock = self.inner.store.lock()?;
            self.replace_locked(&mut state, doc)?;
            self.reload_locked(&mut state)?
        };

        self.emit(RepositoryEvent::Restored { count });
        self.emit(RepositoryEvent::Refreshed {
            count: artifacts.len(),
        });
        Ok(artifacts)
    }

    /// Replaces the whole local sequence with a serialized document.
    ///
    /// The blob is fully decoded and validated before anything changes.
    pub fn restore_from_blob(&self, blob: &str) -> Result<usize> {
        let doc = decode_for_restore(blob)?;
        let count = doc.artifacts.len();
        {
            let mut state = self.lock();
            let _store_lock = self.inner.store.lock()?;
            self.replace_locked(&mut state, doc)?;
        }
        tracing::info!(count, "restored artifacts");
        self.emit(RepositoryEvent::Restored { count });
        Ok(count)
    }

    fn replace_locked(&self, state: &mut State, doc: Document) -> Result<()> {
        self.inner.store.save(&doc)?;
        state.artifacts = doc.artifacts;
        state.version = doc.version;
        state.extra = doc.extra;
        Ok(())
    }
}

fn decode_for_restore(blob: &str) -> Result<Document> {
    let doc = Document::decode(blob)?;
    for artifact in &doc.artifacts {
        artifact
            .validate()
            .map_err(|e| Error::Decode(format!("artifact '{}': {}", artifact.id, e)))?;
    }
    Ok(doc)
}

/// Runs a remote call under `timeout`.
async fn with_timeout<T>(timeout: Duration, call: RemoteFuture<'_, T>) -> Result<T> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::timeout(timeout)),
    }
}

/// Applies `order` to `current`, or explains why it is not a permutation.
fn permute<S: AsRef<str>>(current: &[Artifact], order: &[S]) -> Result<Vec<Artifact>> {
    if order.len() != current.len() {
        return Err(Error::OrderMismatch(format!(
            "expected {} ids, got {}",
            current.len(),
            order.len()
        )));
    }

    let mut remaining: HashMap<&str, &Artifact> =
        current.iter().map(|a| (a.id.as_str(), a)).collect();
    let mut next = Vec::with_capacity(current.len());
    for id in order {
        let id = id.as_ref();
        match remaining.remove(id) {
            Some(artifact) => next.push(artifact.clone()),
            None if current.iter().any(|a| a.id == id) => {
                return Err(Error::OrderMismatch(format!("id '{}' listed twice", id)));
            }
            None => {
                return Err(Error::OrderMismatch(format!("unknown id '{}'", id)));
            }
        }
    }
    Ok(next)
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
