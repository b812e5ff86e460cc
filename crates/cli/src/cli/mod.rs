// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use args::ConfirmArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "artisync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage an ordered set of proxy artifacts and sync them to a gist or snippet")]
#[command(
    long_about = "Manage an ordered set of proxy artifacts (rewrite rules, scripts, filters...).\n\n\
    Artifacts live in a local data directory and can be uploaded to, or restored from, \
    a GitHub Gist, a GitLab Snippet, or a plain backup file."
)]
pub struct Cli {
    /// Data directory (defaults to $ARTISYNC_DIR, then the platform data dir)
    #[arg(long = "data-dir", global = true, value_name = "path")]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Artifacts
    // ─────────────────────────────────────────────────────────────────────────
    /// List artifacts in order
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show one artifact, including its content
    Show {
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Create an artifact at the end of the list
    #[command(after_help = "\
Examples:
  artisync add rewrite \"Strip tracking\" --content '^(.*)\\?utm_.* $1 302'
  artisync add script \"Dark mode\" --file dark.js --disabled")]
    Add {
        /// Artifact type (rewrite, redirect, script, rule, filter, header)
        artifact_type: String,

        /// Display name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Body text
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the body from a file
        #[arg(long, value_name = "path")]
        file: Option<PathBuf>,

        /// Optional description
        #[arg(long, short)]
        description: Option<String>,

        /// Create the artifact disabled
        #[arg(long)]
        disabled: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Change one attribute (name, type, description, content)
    Edit {
        id: String,
        attr: String,
        value: String,
    },

    /// Include artifact(s) in uploads
    #[command(arg_required_else_help = true)]
    Enable {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Keep artifact(s) local only
    #[command(arg_required_else_help = true)]
    Disable {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Copy an artifact; the copy is placed right after it
    Duplicate { id: String },

    /// Delete an artifact
    Delete { id: String },

    /// Set the full order (every id exactly once)
    #[command(arg_required_else_help = true)]
    Reorder {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Move one artifact to a position (1 is the top of the list)
    Move { id: String, position: usize },

    // ─────────────────────────────────────────────────────────────────────────
    // Sync
    // ─────────────────────────────────────────────────────────────────────────
    /// Upload enabled artifacts to the configured remote
    Upload,

    /// Replace local artifacts with the remote copy
    Download {
        #[command(flatten)]
        confirm: ConfirmArgs,
    },

    /// Write enabled artifacts to a backup file
    Export { path: PathBuf },

    /// Replace local artifacts with a backup file
    Import {
        path: PathBuf,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },

    /// Show remote configuration and artifact counts
    Status {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print current settings (tokens are masked)
    Show,

    /// Set one setting
    #[command(after_help = "\
Keys:
  base_url, timeout_seconds, sync_platform,
  gist.token, gist.id, gist.api_url,
  gitlab.token, gitlab.id, gitlab.host")]
    Set { key: String, value: String },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
