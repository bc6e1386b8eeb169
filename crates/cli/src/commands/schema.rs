// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema documents for every command with JSON output.

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{EpicJson, ProjectJson, StatusJson, WorkItemJson};

pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

/// The schema describing the JSON output that `cmd` refers to.
pub fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Project => schema_for!(Vec<ProjectJson>),
        SchemaCommand::Status => schema_for!(Vec<StatusJson>),
        SchemaCommand::Epic => schema_for!(EpicJson),
        SchemaCommand::Item => schema_for!(WorkItemJson),
        SchemaCommand::Board => schema_for!(pk_core::BoardView),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
