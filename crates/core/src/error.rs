// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for artisync-core operations.

use thiserror::Error;

/// All possible errors that can occur in artisync-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error(
        "invalid artifact type: '{0}'\n  hint: valid types are: rewrite, redirect, script, rule, filter, header"
    )]
    InvalidArtifactType(String),

    #[error("artifact not found: {0}")]
    NotFound(String),

    #[error("reorder rejected: {0}\n  hint: pass every artifact id exactly once")]
    OrderMismatch(String),

    #[error("remote not configured: {0}\n  hint: set sync_platform and its credentials with 'artisync config set'")]
    NotConfigured(String),

    #[error("authentication failed: {0}\n  hint: check the access token for the configured sync platform")]
    Auth(String),

    #[error("network error: {message}")]
    Network { message: String, timeout: bool },

    #[error("remote conflict: {0}\n  hint: the remote changed underneath this write; download before uploading again")]
    Conflict(String),

    #[error("remote quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("could not decode artifacts document: {0}")]
    Decode(String),

    #[error("{0} already in progress\n  hint: wait for it to finish and retry")]
    AlreadyInProgress(&'static str),

    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Builds a network error that was caused by a request running out of time.
    pub fn timeout(after: std::time::Duration) -> Self {
        Error::Network {
            message: format!("request timed out after {}s", after.as_secs()),
            timeout: true,
        }
    }

    /// Builds a plain (non-timeout) network error.
    pub fn network(message: impl Into<String>) -> Self {
        Error::Network {
            message: message.into(),
            timeout: false,
        }
    }

    /// Returns true if the error is transient and a manual retry may succeed.
    ///
    /// Nothing in this crate retries on its own.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    /// Returns true if the error was raised locally, before any remote call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::Validation(_)
                | Error::InvalidArtifactType(_)
                | Error::NotFound(_)
                | Error::OrderMismatch(_)
                | Error::AlreadyInProgress(_)
        )
    }
}

/// A specialized Result type for artisync-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
