// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manual backup through a local file.

use std::path::Path;

use artisync_core::SyncOutcome;

use crate::display::artifacts_noun;
use crate::error::Result;

use super::{block_on, open, require_confirmation, Context};

pub fn export(data_dir: &Path, path: &Path) -> Result<()> {
    let ctx = open(data_dir)?;
    export_impl(&ctx, path)
}

pub fn import(data_dir: &Path, path: &Path, yes: bool) -> Result<()> {
    require_confirmation(yes, "import")?;
    let ctx = open(data_dir)?;
    import_impl(&ctx, path)
}

/// Internal implementation that accepts a context for testing.
pub(crate) fn export_impl(ctx: &Context, path: &Path) -> Result<()> {
    let coordinator = ctx.coordinator();
    if let SyncOutcome::Completed { count, .. } = block_on(coordinator.export_file(path))?? {
        println!(
            "Exported {} {} to {}",
            count,
            artifacts_noun(count),
            path.display()
        );
    }
    Ok(())
}

pub(crate) fn import_impl(ctx: &Context, path: &Path) -> Result<()> {
    let coordinator = ctx.coordinator();
    if let SyncOutcome::Completed { count, .. } = block_on(coordinator.import_file(path))?? {
        println!(
            "Imported {} {} from {}",
            count,
            artifacts_noun(count),
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
