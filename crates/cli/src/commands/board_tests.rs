// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::item::{self, ItemOptions};
use crate::commands::testing::TestContext;
use crate::error::Error;

fn with_board() -> TestContext {
    let ctx = TestContext::new();
    create(&ctx, "Delivery", true).unwrap();
    ctx
}

fn keys(view: &BoardView, status: &str) -> Vec<String> {
    view.columns
        .iter()
        .find(|c| c.status_name == status)
        .map(|c| c.items.iter().map(|card| card.key.clone()).collect())
        .unwrap_or_default()
}

fn names(view: &BoardView) -> Vec<&str> {
    view.columns.iter().map(|c| c.status_name.as_str()).collect()
}

#[test]
fn create_adds_column_per_active_status() {
    let ctx = with_board();
    let view = show(&ctx, None).unwrap();

    assert_eq!(view.board_name, "Delivery");
    assert_eq!(view.project_key, "PROJ");
    assert_eq!(
        names(&view),
        vec!["Backlog", "In Progress", "Done", "Cancelled"]
    );
    assert_eq!(view.total_items, 0);
}

#[test]
fn show_without_board_is_an_error() {
    let ctx = TestContext::new();
    let err = show(&ctx, None).unwrap_err();
    assert!(matches!(err, Error::NoBoard { ref project } if project == "PROJ"));
}

#[test]
fn show_selects_board_by_name_or_id() {
    let ctx = with_board();
    let second = create(&ctx, "Ops", false).unwrap();

    assert_eq!(show(&ctx, None).unwrap().board_name, "Delivery");
    assert_eq!(show(&ctx, Some("ops")).unwrap().board_id, second.id);
    assert_eq!(
        show(&ctx, Some(&second.id.to_string())).unwrap().board_name,
        "Ops"
    );
    let err = show(&ctx, Some("missing")).unwrap_err();
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn show_places_items_in_status_columns() {
    let ctx = with_board();
    item::create(&ctx, "First", ItemOptions::default()).unwrap();
    item::create(&ctx, "Second", ItemOptions::default()).unwrap();
    item::move_to(&ctx, "PROJ-2", "In Progress", None, None).unwrap();
    item::create(&ctx, "Third", ItemOptions::default()).unwrap();
    item::archive(&ctx, "PROJ-3").unwrap();

    let view = show(&ctx, None).unwrap();
    assert_eq!(keys(&view, "Backlog"), vec!["PROJ-1"]);
    assert_eq!(keys(&view, "In Progress"), vec!["PROJ-2"]);
    assert_eq!(view.total_items, 2);
}

#[test]
fn rank_moves_card_within_column() {
    let ctx = with_board();
    for summary in ["A", "B", "C"] {
        item::create(&ctx, summary, ItemOptions::default()).unwrap();
    }

    let indexes = rank(&ctx, "proj-3", 0).unwrap();
    assert_eq!(indexes.len(), 3);

    let view = show(&ctx, None).unwrap();
    assert_eq!(keys(&view, "Backlog"), vec!["PROJ-3", "PROJ-1", "PROJ-2"]);
}

#[test]
fn rank_archived_item_is_rejected() {
    let ctx = with_board();
    item::create(&ctx, "A", ItemOptions::default()).unwrap();
    item::archive(&ctx, "PROJ-1").unwrap();

    let err = rank(&ctx, "PROJ-1", 0).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn configure_columns_reorders_by_status_name() {
    let ctx = with_board();
    let changes = ColumnChanges {
        order: ["done", "backlog", "cancelled", "in progress"]
            .map(String::from)
            .to_vec(),
        ..ColumnChanges::default()
    };

    let view = configure_columns(&ctx, None, &changes).unwrap();
    assert_eq!(
        names(&view),
        vec!["Done", "Backlog", "Cancelled", "In Progress"]
    );
}

#[test]
fn configure_columns_partial_order_is_rejected() {
    let ctx = with_board();
    let changes = ColumnChanges {
        order: vec!["Done".to_string(), "Backlog".to_string()],
        ..ColumnChanges::default()
    };

    let err = configure_columns(&ctx, None, &changes).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        names(&show(&ctx, None).unwrap()),
        vec!["Backlog", "In Progress", "Done", "Cancelled"]
    );
}

#[test]
fn configure_columns_sets_wip_and_collapse() {
    let ctx = with_board();
    for summary in ["A", "B"] {
        item::create(&ctx, summary, ItemOptions::default()).unwrap();
    }
    let changes = ColumnChanges {
        wip: vec![
            WipAssignment {
                status: "Backlog".to_string(),
                limit: Some(1),
            },
            WipAssignment {
                status: "Done".to_string(),
                limit: Some(5),
            },
        ],
        collapse: vec!["Cancelled".to_string()],
        ..ColumnChanges::default()
    };

    let view = configure_columns(&ctx, None, &changes).unwrap();
    let backlog = view.column_for_status(ctx.status_id("Backlog")).unwrap();
    assert_eq!(backlog.wip_limit, Some(1));
    assert!(backlog.over_wip_limit);
    assert_eq!(backlog.item_count(), 2);

    let cancelled = view.column_for_status(ctx.status_id("Cancelled")).unwrap();
    assert!(cancelled.is_collapsed);

    let cleared = ColumnChanges {
        wip: vec![WipAssignment {
            status: "Backlog".to_string(),
            limit: None,
        }],
        expand: vec!["Cancelled".to_string()],
        ..ColumnChanges::default()
    };
    let view = configure_columns(&ctx, None, &cleared).unwrap();
    let backlog = view.column_for_status(ctx.status_id("Backlog")).unwrap();
    assert_eq!(backlog.wip_limit, None);
    assert!(!backlog.over_wip_limit);
    assert!(
        !view
            .column_for_status(ctx.status_id("Cancelled"))
            .unwrap()
            .is_collapsed
    );
}

#[test]
fn configure_columns_unknown_status_changes_nothing() {
    let ctx = with_board();
    let changes = ColumnChanges {
        collapse: vec!["Backlog".to_string()],
        expand: vec!["Review".to_string()],
        ..ColumnChanges::default()
    };

    let err = configure_columns(&ctx, None, &changes).unwrap_err();
    assert!(matches!(err, Error::UnknownStatus { ref name, .. } if name == "Review"));

    let view = show(&ctx, None).unwrap();
    assert!(view.columns.iter().all(|c| !c.is_collapsed));
}

#[test]
fn configure_columns_without_changes_returns_view() {
    let ctx = with_board();
    let view = configure_columns(&ctx, None, &ColumnChanges::default()).unwrap();
    assert_eq!(view.columns.len(), 4);
}
