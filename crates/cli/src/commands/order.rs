// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::error::Result;

use super::{open, Context};

pub fn reorder(data_dir: &Path, ids: &[String]) -> Result<()> {
    let ctx = open(data_dir)?;
    reorder_impl(&ctx, ids)
}

pub fn move_to(data_dir: &Path, id: &str, position: usize) -> Result<()> {
    let ctx = open(data_dir)?;
    move_impl(&ctx, id, position)
}

/// Internal implementation that accepts a context for testing.
pub(crate) fn reorder_impl(ctx: &Context, ids: &[String]) -> Result<()> {
    ctx.repo.reorder(ids)?;
    println!("Reordered {} artifacts", ids.len());
    Ok(())
}

/// Moves `id` to a 1-based `position`.
pub(crate) fn move_impl(ctx: &Context, id: &str, position: usize) -> Result<()> {
    let index = position.checked_sub(1).ok_or_else(|| {
        artisync_core::Error::Validation("positions start at 1".to_string())
    })?;
    ctx.repo.move_artifact(id, index)?;
    println!("Moved {} to position {}", id, position);
    Ok(())
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
