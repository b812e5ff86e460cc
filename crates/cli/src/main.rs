// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use artisync_cli::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    artisync_cli::logging::init(cli.verbose);
    if let Err(e) = artisync_cli::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
