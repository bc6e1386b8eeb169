// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// CLI parsing tests, split by command group.

use super::*;

mod setup_tests;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}
