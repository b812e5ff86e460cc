// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! artisync_cli - the command-line front end for artisync-core.
//!
//! Each subcommand opens the data directory, runs one repository or
//! coordinator operation, prints the result, and exits. Canonical state
//! always lives in the data directory; the CLI holds nothing between runs.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`run`] - dispatch to the command implementations
//! - [`logging`] - `tracing` subscriber setup
//! - [`Error`] - CLI errors wrapping [`artisync_core::Error`]

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, ConfigCommand, ConfirmArgs, OutputFormat};
pub use error::{Error, Result};

use commands::add::AddArgs;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let data_dir = commands::resolve_data_dir(cli.data_dir)?;
    let data_dir = data_dir.as_path();

    match cli.command {
        Command::List { output } => commands::list::run(data_dir, output),
        Command::Show { id, output } => commands::show::run(data_dir, &id, output),
        Command::Add {
            artifact_type,
            name,
            content,
            file,
            description,
            disabled,
            output,
        } => commands::add::run(
            data_dir,
            AddArgs {
                artifact_type,
                name,
                content,
                file,
                description,
                disabled,
                output,
            },
        ),
        Command::Edit { id, attr, value } => commands::edit::run(data_dir, &id, &attr, &value),
        Command::Enable { ids } => commands::lifecycle::enable(data_dir, &ids),
        Command::Disable { ids } => commands::lifecycle::disable(data_dir, &ids),
        Command::Duplicate { id } => commands::lifecycle::duplicate(data_dir, &id),
        Command::Delete { id } => commands::lifecycle::delete(data_dir, &id),
        Command::Reorder { ids } => commands::order::reorder(data_dir, &ids),
        Command::Move { id, position } => commands::order::move_to(data_dir, &id, position),
        Command::Upload => commands::sync::upload(data_dir),
        Command::Download { confirm } => commands::sync::download(data_dir, confirm.yes),
        Command::Export { path } => commands::backup::export(data_dir, &path),
        Command::Import { path, confirm } => commands::backup::import(data_dir, &path, confirm.yes),
        Command::Status { output } => commands::sync::status(data_dir, output),
        Command::Config(cmd) => commands::config::run(data_dir, cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
