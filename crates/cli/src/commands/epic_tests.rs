// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::item::{self, ItemOptions};
use crate::commands::testing::TestContext;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn item_in(ctx: &Context, epic: &str, summary: &str) -> String {
    item::create(
        ctx,
        summary,
        ItemOptions {
            epic: Some(epic.to_string()),
            ..ItemOptions::default()
        },
    )
    .unwrap()
    .key
}

#[test]
fn create_assigns_epic_keys() {
    let ctx = TestContext::new();
    let first = create(&ctx, "Checkout", EpicOptions::default()).unwrap();
    let second = create(&ctx, "Search", EpicOptions::default()).unwrap();
    assert_eq!(first.key, "PROJ-EPIC-1");
    assert_eq!(second.key, "PROJ-EPIC-2");

    // Epic and work item counters are independent.
    assert_eq!(
        item::create(&ctx, "Task", ItemOptions::default()).unwrap().key,
        "PROJ-1"
    );
}

#[test]
fn create_with_dates_and_status() {
    let ctx = TestContext::new();
    let epic = create(
        &ctx,
        "Launch",
        EpicOptions {
            status: Some("In Progress".to_string()),
            priority: Some(1),
            start_date: date(2026, 1, 5),
            due_date: date(2026, 2, 1),
            ..EpicOptions::default()
        },
    )
    .unwrap();
    assert_eq!(epic.status_id, ctx.status_id("In Progress"));
    assert_eq!(epic.priority, 1);
    assert_eq!(epic.due_date, date(2026, 2, 1));
}

#[test]
fn create_rejects_due_before_start() {
    let ctx = TestContext::new();
    let err = create(
        &ctx,
        "Launch",
        EpicOptions {
            start_date: date(2026, 2, 1),
            due_date: date(2026, 1, 5),
            ..EpicOptions::default()
        },
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn details_report_progress() {
    let ctx = TestContext::new();
    let epic = create(&ctx, "Checkout", EpicOptions::default()).unwrap();
    let keys: Vec<String> = (0..4)
        .map(|i| item_in(&ctx, &epic.key, &format!("Item {i}")))
        .collect();
    for key in &keys[..2] {
        item::move_to(&ctx, key, "In Progress", None, None).unwrap();
        item::move_to(&ctx, key, "Done", None, None).unwrap();
    }

    let json = details(&ctx, &epic).unwrap();
    assert_eq!(json.status, "Backlog");
    assert_eq!(json.progress.work_item_count, 4);
    assert_eq!(json.progress.completed_work_item_count, 2);
    assert_eq!(json.progress.percent_complete, 50);
    assert_eq!(find(&ctx, &epic.key).unwrap().version, 1);
}

#[test]
fn archived_epic_takes_no_new_items() {
    let ctx = TestContext::new();
    let epic = create(&ctx, "Checkout", EpicOptions::default()).unwrap();
    let archived = archive(&ctx, "proj-epic-1").unwrap();
    assert!(archived.is_archived);

    let err = item::create(
        &ctx,
        "Late",
        ItemOptions {
            epic: Some(epic.key),
            ..ItemOptions::default()
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("archived"));
}
