// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap()
}

fn work_item() -> WorkItem {
    WorkItem {
        id: 7,
        project_id: 1,
        epic_id: Some(2),
        key: "CORE-7".to_string(),
        item_type: WorkItemType::Bug,
        summary: "Fix login".to_string(),
        description: None,
        assignee: Some("alice".to_string()),
        status_id: 2,
        priority: 2,
        parent_id: None,
        order_index: Some(0),
        is_archived: false,
        created_at: created(),
        updated_at: created(),
        version: 3,
    }
}

#[test]
fn work_item_json_uses_keys_and_names() {
    let refs = ItemRefs {
        project: "CORE".to_string(),
        status: "In Progress".to_string(),
        epic: Some("CORE-EPIC-2".to_string()),
        parent: None,
        children: vec!["CORE-8".to_string()],
    };
    let json = serde_json::to_value(WorkItemJson::new(&work_item(), refs)).unwrap();

    assert_eq!(json["key"], "CORE-7");
    assert_eq!(json["type"], "bug");
    assert_eq!(json["status"], "In Progress");
    assert_eq!(json["epic"], "CORE-EPIC-2");
    assert_eq!(json["children"][0], "CORE-8");
    assert_eq!(json["version"], 3);
    assert!(json.get("parent").is_none());
    assert!(json.get("description").is_none());
}

#[test]
fn epic_json_includes_progress() {
    let epic = Epic {
        id: 2,
        project_id: 1,
        key: "CORE-EPIC-2".to_string(),
        summary: "Checkout".to_string(),
        description: None,
        assignee: None,
        status_id: 1,
        priority: 3,
        start_date: NaiveDate::from_ymd_opt(2026, 1, 5),
        due_date: None,
        is_archived: false,
        created_at: created(),
        updated_at: created(),
        version: 1,
    };
    let progress = EpicProgress {
        epic_id: 2,
        work_item_count: 4,
        completed_work_item_count: 1,
    };
    let json = serde_json::to_value(EpicJson::new(&epic, "CORE", "Backlog", &progress)).unwrap();

    assert_eq!(json["progress"]["work_item_count"], 4);
    assert_eq!(json["progress"]["percent_complete"], 25);
    assert_eq!(json["start_date"], "2026-01-05");
    assert!(json.get("due_date").is_none());
}

#[test]
fn status_json_lists_targets() {
    let status = Status::new("Backlog", 0).default_for_new();
    let json = StatusJson::new(&status, vec!["In Progress".to_string()]);
    assert!(json.is_default);
    assert_eq!(json.allowed_targets, vec!["In Progress"]);
}

#[test]
fn item_schema_names_fields() {
    let schema = schemars::schema_for!(WorkItemJson);
    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains("\"$schema\""));
    assert!(json.contains("\"WorkItemJson\""));
    assert!(json.contains("\"type\""));
    assert!(json.contains("\"children\""));
}

#[test]
fn board_schema_includes_nested_types() {
    let schema = schemars::schema_for!(pk_core::BoardView);
    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains("\"ColumnView\""));
    assert!(json.contains("\"Card\""));
}
