// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::OutputFormat;
use crate::display::format_artifact_details;
use crate::error::Result;

use super::{open, Context};

pub fn run(data_dir: &Path, id: &str, output: OutputFormat) -> Result<()> {
    let ctx = open(data_dir)?;
    run_impl(&ctx, id, output)
}

/// Internal implementation that accepts a context for testing.
pub(crate) fn run_impl(ctx: &Context, id: &str, output: OutputFormat) -> Result<()> {
    let artifact = ctx.repo.get(id)?;
    match output {
        OutputFormat::Text => print!("{}", format_artifact_details(&artifact)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&artifact)?),
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
