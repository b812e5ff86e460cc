// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

/// Confirmation for commands that overwrite local state.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfirmArgs {
    /// Confirm replacing every local artifact
    #[arg(long, short = 'y')]
    pub yes: bool,
}
