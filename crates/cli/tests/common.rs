// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn plank() -> Command {
    let mut cmd = cargo_bin_cmd!("plank");
    cmd.env_remove("PLANK_LOG").env("NO_COLOR", "1");
    cmd
}

/// Runs `plank` with `args` inside `temp`.
pub fn plank_in(temp: &TempDir, args: &[&str]) -> Command {
    let mut cmd = plank();
    cmd.args(args).current_dir(temp.path());
    cmd
}

/// An initialized directory with project `PROJ` and its default board.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    plank_in(&temp, &["init", "-p", "PROJ", "--name", "Project"])
        .assert()
        .success();
    temp
}

/// Creates a work item and returns its key.
pub fn create_item(temp: &TempDir, summary: &str, extra: &[&str]) -> String {
    let mut args = vec!["item", "new", summary, "-o", "json"];
    args.extend_from_slice(extra);
    let json = json_output(temp, &args);
    json["key"].as_str().unwrap().to_string()
}

/// Runs a successful command and parses its stdout as JSON.
pub fn json_output(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = plank_in(temp, args).output().unwrap();
    assert!(
        output.status.success(),
        "plank {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
