// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;
use std::str::FromStr;

use artisync_core::ArtifactType;

use crate::error::{Error, Result};

use super::{open, Context};

pub fn run(data_dir: &Path, id: &str, attr: &str, value: &str) -> Result<()> {
    let ctx = open(data_dir)?;
    run_impl(&ctx, id, attr, value)
}

/// Internal implementation that accepts a context for testing.
pub(crate) fn run_impl(ctx: &Context, id: &str, attr: &str, value: &str) -> Result<()> {
    let mut artifact = ctx.repo.get(id)?;

    match attr.to_lowercase().as_str() {
        "name" | "title" => {
            let name = value.trim();
            if name.is_empty() {
                return Err(Error::FieldEmpty { field: "name" });
            }
            artifact.name = name.to_string();
        }
        "type" => artifact.artifact_type = ArtifactType::from_str(value)?,
        "description" => {
            let trimmed = value.trim();
            artifact.description = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        "content" => artifact.content = value.to_string(),
        _ => {
            return Err(Error::UnknownAttribute {
                attr: attr.to_string(),
            })
        }
    }

    let saved = ctx.repo.save(artifact)?;
    println!("Updated {} of {}", attr.to_lowercase(), saved.id);
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
