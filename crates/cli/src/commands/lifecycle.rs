// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::error::Result;

use super::{open, Context};

pub fn enable(data_dir: &Path, ids: &[String]) -> Result<()> {
    let ctx = open(data_dir)?;
    set_enabled_impl(&ctx, ids, true)
}

pub fn disable(data_dir: &Path, ids: &[String]) -> Result<()> {
    let ctx = open(data_dir)?;
    set_enabled_impl(&ctx, ids, false)
}

pub fn duplicate(data_dir: &Path, id: &str) -> Result<()> {
    let ctx = open(data_dir)?;
    duplicate_impl(&ctx, id).map(|_| ())
}

pub fn delete(data_dir: &Path, id: &str) -> Result<()> {
    let ctx = open(data_dir)?;
    delete_impl(&ctx, id)
}

/// Internal implementation that accepts a context for testing.
pub(crate) fn set_enabled_impl(ctx: &Context, ids: &[String], enabled: bool) -> Result<()> {
    // Resolve all IDs first (fail fast if any is invalid)
    for id in ids {
        ctx.repo.get(id)?;
    }

    let verb = if enabled { "Enabled" } else { "Disabled" };
    for id in ids {
        let artifact = ctx.repo.set_enabled(id, enabled)?;
        println!("{} {} ({})", verb, artifact.name, artifact.id);
    }
    Ok(())
}

/// Returns the id of the copy.
pub(crate) fn duplicate_impl(ctx: &Context, id: &str) -> Result<String> {
    let copy = ctx.repo.duplicate(id)?;
    println!("Duplicated {} as {} ({})", id, copy.name, copy.id);
    Ok(copy.id)
}

pub(crate) fn delete_impl(ctx: &Context, id: &str) -> Result<()> {
    let artifact = ctx.repo.get(id)?;
    ctx.repo.delete(id)?;
    println!("Deleted {} ({})", artifact.name, artifact.id);
    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
