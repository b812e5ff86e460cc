// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! artisync-core: artifact repository and sync engine
//!
//! This crate owns the ordered collection of artifacts (rewrite rules,
//! scripts, filters...), persists it locally, and mirrors it to a remote
//! document store (GitHub Gist, GitLab Snippet, or a plain backup file).
//! Front ends such as the `artisync` CLI drive it through
//! [`ArtifactRepository`] and [`SyncCoordinator`].

pub mod artifact;
pub mod config;
pub mod coordinator;
pub mod document;
pub mod error;
pub mod id;
pub mod remote;
pub mod repository;
pub mod store;

#[cfg(test)]
mod test_helpers;

pub use artifact::{Artifact, ArtifactType};
pub use config::{Settings, SyncPlatform};
pub use coordinator::{CancelToken, SyncCoordinator, SyncOutcome, SyncStatus};
pub use document::Document;
pub use error::{Error, Result};
pub use remote::{adapter_from_settings, RemoteAdapter, WriteReceipt};
pub use repository::{ArtifactRepository, RepositoryEvent, SyncReport};
pub use store::LocalStore;
