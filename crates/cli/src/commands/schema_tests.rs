// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn json(cmd: SchemaCommand) -> String {
    serde_json::to_string(&schema(cmd)).unwrap()
}

#[parameterized(
    project = { SchemaCommand::Project, "\"is_archived\"" },
    status = { SchemaCommand::Status, "\"allowed_targets\"" },
    epic = { SchemaCommand::Epic, "\"progress\"" },
    item = { SchemaCommand::Item, "\"children\"" },
    board = { SchemaCommand::Board, "\"over_wip_limit\"" },
)]
fn schema_mentions_output_fields(cmd: SchemaCommand, field: &str) {
    let json = json(cmd);
    assert!(json.contains("\"$schema\""));
    assert!(json.contains(field), "missing {field} in {json}");
}

#[test]
fn list_schemas_are_arrays() {
    for cmd in [SchemaCommand::Project, SchemaCommand::Status] {
        let value: serde_json::Value = serde_json::from_str(&json(cmd)).unwrap();
        assert_eq!(value["type"], "array");
    }
}

#[test]
fn item_schema_renames_type_field() {
    let json = json(SchemaCommand::Item);
    assert!(json.contains("\"type\""));
    assert!(!json.contains("\"item_type\""));
}

#[test]
fn board_schema_includes_cards() {
    assert!(json(SchemaCommand::Board).contains("\"Card\""));
}
