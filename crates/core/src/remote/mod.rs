// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote stores for the artifacts document.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  Repository  │────►│ RemoteAdapter │────►│ Gist/Snippet │
//! │              │◄────│    (trait)    │◄────│  /file/none  │
//! └──────────────┘     └───────────────┘     └──────────────┘
//! ```
//!
//! Every adapter moves one opaque blob (an encoded [`Document`]) in either
//! direction. Which adapter is active is decided once, in
//! [`adapter_from_settings`]; the repository and coordinator never branch
//! on the platform.
//!
//! [`Document`]: crate::document::Document

mod file;
mod gist;
mod http;
mod snippet;

pub use file::FileAdapter;
pub use gist::GistAdapter;
pub use snippet::SnippetAdapter;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::config::{Settings, SyncPlatform};
use crate::error::{Error, Result};

/// Boxed future returned by adapter calls.
pub type RemoteFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// What a successful write reports back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReceipt {
    /// Set when the write created the remote document (new gist id,
    /// snippet id...), so callers can persist it for later reads.
    pub created: Option<String>,
}

/// Uniform read/write interface over a remote document store.
///
/// Implementations report failures as [`Error::NotConfigured`],
/// [`Error::Auth`], [`Error::Network`], [`Error::QuotaExceeded`] or
/// [`Error::Conflict`].
pub trait RemoteAdapter: Send + Sync {
    /// Returns true if credentials are present and a call could succeed.
    fn is_configured(&self) -> bool;

    /// Human-readable location, for status output and logs.
    fn describe(&self) -> String;

    /// Reads the serialized document.
    fn read(&self) -> RemoteFuture<'_, String>;

    /// Replaces the serialized document.
    fn write(&self, blob: String) -> RemoteFuture<'_, WriteReceipt>;
}

/// Adapter for `sync_platform = "none"` or missing credentials.
///
/// Every call fails with [`Error::NotConfigured`] carrying the reason.
#[derive(Debug, Clone)]
pub struct NoRemote {
    platform: SyncPlatform,
    reason: String,
}

impl NoRemote {
    pub fn new(platform: SyncPlatform, reason: impl Into<String>) -> Self {
        NoRemote {
            platform,
            reason: reason.into(),
        }
    }
}

impl RemoteAdapter for NoRemote {
    fn is_configured(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        format!("{} (not configured)", self.platform)
    }

    fn read(&self) -> RemoteFuture<'_, String> {
        let reason = self.reason.clone();
        Box::pin(async move { Err(Error::NotConfigured(reason)) })
    }

    fn write(&self, _blob: String) -> RemoteFuture<'_, WriteReceipt> {
        let reason = self.reason.clone();
        Box::pin(async move { Err(Error::NotConfigured(reason)) })
    }
}

/// Builds the adapter selected by `settings`.
///
/// Missing credentials produce a [`NoRemote`] rather than an error, so the
/// front end can still run local commands and report the problem when a
/// sync is attempted.
pub fn adapter_from_settings(settings: &Settings) -> Result<Arc<dyn RemoteAdapter>> {
    let timeout = settings.timeout();
    let adapter: Arc<dyn RemoteAdapter> = match settings.sync_platform {
        SyncPlatform::None => Arc::new(NoRemote::new(
            SyncPlatform::None,
            "sync_platform is 'none'",
        )),
        SyncPlatform::Gist => match settings.credentials.gist {
            Some(ref creds) if !creds.token.is_empty() => {
                Arc::new(GistAdapter::new(creds.clone(), timeout)?)
            }
            _ => Arc::new(NoRemote::new(SyncPlatform::Gist, "missing gist.token")),
        },
        SyncPlatform::Gitlab => match settings.credentials.gitlab {
            Some(ref creds) if !creds.token.is_empty() => {
                Arc::new(SnippetAdapter::new(creds.clone(), timeout)?)
            }
            _ => Arc::new(NoRemote::new(SyncPlatform::Gitlab, "missing gitlab.token")),
        },
    };
    tracing::debug!(remote = %adapter.describe(), "selected remote adapter");
    Ok(adapter)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
