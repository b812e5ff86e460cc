// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the artisync CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] artisync_core::Error),

    #[error("{operation} replaces every local artifact\n  hint: re-run with --yes to confirm")]
    ConfirmationRequired { operation: &'static str },

    #[error("unknown attribute '{attr}'\n  hint: editable attributes are: name, type, description, content")]
    UnknownAttribute { attr: String },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("--content and --file cannot be used together")]
    ConflictingContent,

    #[error("could not determine a data directory\n  hint: pass --data-dir or set ARTISYNC_DIR")]
    NoDataDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
