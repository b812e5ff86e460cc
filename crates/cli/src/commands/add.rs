// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};
use std::str::FromStr;

use artisync_core::ArtifactType;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::{open, Context};

/// Options for `artisync add`.
pub struct AddArgs {
    pub artifact_type: String,
    pub name: String,
    pub content: Option<String>,
    pub file: Option<PathBuf>,
    pub description: Option<String>,
    pub disabled: bool,
    pub output: OutputFormat,
}

pub fn run(data_dir: &Path, args: AddArgs) -> Result<()> {
    let ctx = open(data_dir)?;
    run_impl(&ctx, args).map(|_| ())
}

/// Internal implementation that accepts a context for testing.
///
/// Returns the id of the new artifact.
pub(crate) fn run_impl(ctx: &Context, args: AddArgs) -> Result<String> {
    // Fail on bad input before touching the repository.
    let artifact_type = ArtifactType::from_str(&args.artifact_type)?;
    let content = match (args.content, args.file) {
        (Some(_), Some(_)) => return Err(Error::ConflictingContent),
        (Some(content), None) => content,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let mut artifact = ctx.repo.create(&args.name, artifact_type, &content)?;

    let description = args
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    if description.is_some() || args.disabled {
        artifact.description = description;
        artifact.is_enabled = !args.disabled;
        artifact = ctx.repo.save(artifact)?;
    }

    match args.output {
        OutputFormat::Text => println!(
            "Created [{}] {} ({})",
            artifact.artifact_type, artifact.name, artifact.id
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&artifact)?),
    }
    Ok(artifact.id)
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
