// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `artisync` binary.
//!
//! The files under `cli/` are compiled as integration tests of the
//! `artisync` package (see `crates/cli/Cargo.toml`) so they can run the
//! built binary. Each file includes `cli/common.rs` for shared helpers.
