// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    story = { "story", WorkItemType::Story },
    bug = { "bug", WorkItemType::Bug },
    task = { "task", WorkItemType::Task },
    subtask = { "subtask", WorkItemType::Subtask },
    subtask_dash = { "sub-task", WorkItemType::Subtask },
    upper = { "BUG", WorkItemType::Bug },
    mixed = { "Story", WorkItemType::Story },
)]
fn work_item_type_from_str_valid(input: &str, expected: WorkItemType) {
    assert_eq!(input.parse::<WorkItemType>().unwrap(), expected);
}

#[parameterized(
    invalid = { "epic" },
    empty = { "" },
)]
fn work_item_type_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<WorkItemType>(),
        Err(Error::InvalidWorkItemType(_))
    ));
}

#[parameterized(
    story = { WorkItemType::Story, "story" },
    subtask = { WorkItemType::Subtask, "subtask" },
)]
fn work_item_type_display(item_type: WorkItemType, expected: &str) {
    assert_eq!(item_type.to_string(), expected);
}

#[test]
fn work_item_type_serde_snake_case() {
    let json = serde_json::to_string(&WorkItemType::Subtask).unwrap();
    assert_eq!(json, "\"subtask\"");
}

#[test]
fn empty_patch() {
    assert!(WorkItemPatch::default().is_empty());
    let patch = WorkItemPatch {
        expected_version: Some(3),
        ..Default::default()
    };
    assert!(patch.is_empty());
    let patch = WorkItemPatch {
        parent_id: Some(None),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn new_work_item_deserializes_with_defaults() {
    let req: NewWorkItem =
        serde_json::from_str(r#"{"project_id": 1, "summary": "Write docs"}"#).unwrap();
    assert_eq!(req.project_id, 1);
    assert_eq!(req.item_type, None);
    assert_eq!(req.parent_id, None);
}
