// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use artisync_core::SyncOutcome;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::artifacts_noun;
use crate::error::Result;

use super::{block_on, open, require_confirmation, Context};

pub fn upload(data_dir: &Path) -> Result<()> {
    let mut ctx = open(data_dir)?;
    upload_impl(&mut ctx)
}

pub fn download(data_dir: &Path, yes: bool) -> Result<()> {
    require_confirmation(yes, "download")?;
    let ctx = open(data_dir)?;
    download_impl(&ctx)
}

pub fn status(data_dir: &Path, output: OutputFormat) -> Result<()> {
    let ctx = open(data_dir)?;
    status_impl(&ctx, output)
}

/// Internal implementation that accepts a context for testing.
///
/// A first upload that creates the remote document records its id in the
/// settings so later downloads find it.
pub(crate) fn upload_impl(ctx: &mut Context) -> Result<()> {
    let coordinator = ctx.coordinator();
    match block_on(coordinator.upload_all())?? {
        SyncOutcome::Completed { count, created } => {
            println!(
                "Uploaded {} {} to {}",
                count,
                artifacts_noun(count),
                ctx.repo.remote().describe()
            );
            if let Some(location) = created {
                ctx.settings.remember_location(&location);
                ctx.settings.save(&ctx.data_dir)?;
                tracing::info!(%location, "remembered new remote document");
                println!("Saved remote id {} to settings", location);
            }
        }
        SyncOutcome::Cancelled => println!("Upload cancelled"),
    }
    Ok(())
}

pub(crate) fn download_impl(ctx: &Context) -> Result<()> {
    let coordinator = ctx.coordinator();
    match block_on(coordinator.download_all())?? {
        SyncOutcome::Completed { count, .. } => println!(
            "Downloaded {} {} from {}",
            count,
            artifacts_noun(count),
            ctx.repo.remote().describe()
        ),
        SyncOutcome::Cancelled => println!("Download cancelled"),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct StatusReport {
    data_dir: String,
    sync_platform: String,
    remote: String,
    remote_configured: bool,
    timeout_seconds: u64,
    artifacts: usize,
    enabled: usize,
}

fn build_status(ctx: &Context) -> StatusReport {
    let artifacts = ctx.repo.get_all();
    StatusReport {
        data_dir: ctx.data_dir.display().to_string(),
        sync_platform: ctx.settings.sync_platform.to_string(),
        remote: ctx.repo.remote().describe(),
        remote_configured: ctx.repo.is_remote_configured(),
        timeout_seconds: ctx.settings.timeout_seconds,
        artifacts: artifacts.len(),
        enabled: artifacts.iter().filter(|a| a.is_enabled).count(),
    }
}

pub(crate) fn status_impl(ctx: &Context, output: OutputFormat) -> Result<()> {
    let report = build_status(ctx);
    match output {
        OutputFormat::Text => {
            println!("Data dir: {}", report.data_dir);
            println!("Platform: {}", report.sync_platform);
            println!("Remote:   {}", report.remote);
            println!("Timeout:  {}s", report.timeout_seconds);
            println!(
                "Artifacts: {} ({} enabled)",
                report.artifacts, report.enabled
            );
            if !report.remote_configured {
                println!(
                    "\nUploads and downloads are unavailable until a sync platform is configured."
                );
                println!("  artisync config set sync_platform gist");
                println!("  artisync config set gist.token <token>");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
