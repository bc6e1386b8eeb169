// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Tests for the public `run()` function.
//!
//! Commands that open the database depend on the current directory and are
//! covered by the integration tests; these exercise the routes that do not.

use super::*;
use clap::{CommandFactory, Parser};

#[test]
fn run_schema_needs_no_database() {
    let cli = Cli::try_parse_from(["plank", "schema", "board"]).unwrap();
    run(cli).unwrap();
}

#[test]
fn run_completion_needs_no_database() {
    let cli = Cli::try_parse_from(["plank", "completion", "bash"]).unwrap();
    run(cli).unwrap();
}

#[test]
fn command_factory_is_consistent() {
    Cli::command().debug_assert();
}
