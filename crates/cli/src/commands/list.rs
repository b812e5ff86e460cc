// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_artifact_line;
use crate::error::Result;

use super::{open, Context};

pub fn run(data_dir: &Path, output: OutputFormat) -> Result<()> {
    let ctx = open(data_dir)?;
    run_impl(&ctx, output)
}

/// Internal implementation that accepts a context for testing.
pub(crate) fn run_impl(ctx: &Context, output: OutputFormat) -> Result<()> {
    let artifacts = ctx.repo.get_all();

    match output {
        OutputFormat::Text => {
            if artifacts.is_empty() {
                println!("No artifacts.");
                return Ok(());
            }
            let color = colors::should_colorize();
            for (i, artifact) in artifacts.iter().enumerate() {
                println!("{}", format_artifact_line(i + 1, artifact, color));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&artifacts)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
