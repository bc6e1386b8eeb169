// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use similar_asserts::assert_eq;

/// Keys per column name from `board show -o json`.
fn columns(temp: &TempDir) -> Vec<(String, Vec<String>)> {
    let json = json_output(temp, &["board", "show", "-o", "json"]);
    json["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            let keys = c["items"]
                .as_array()
                .unwrap()
                .iter()
                .map(|card| card["key"].as_str().unwrap().to_string())
                .collect();
            (c["status_name"].as_str().unwrap().to_string(), keys)
        })
        .collect()
}

fn keys_in(temp: &TempDir, status: &str) -> Vec<String> {
    columns(temp)
        .into_iter()
        .find(|(name, _)| name == status)
        .map(|(_, keys)| keys)
        .unwrap_or_default()
}

#[test]
fn board_text_groups_cards_by_status() {
    let temp = init_temp();
    create_item(&temp, "Write docs", &["-a", "alice"]);
    let key = create_item(&temp, "Ship it", &["-t", "story", "--priority", "1"]);
    plank_in(&temp, &["item", "move", &key, "In Progress"])
        .assert()
        .success();

    plank_in(&temp, &["board", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJ / Board (2 items)"))
        .stdout(predicate::str::contains("Backlog (1)"))
        .stdout(predicate::str::contains("  PROJ-1 [task] P3 Write docs @alice"))
        .stdout(predicate::str::contains("In Progress (1)"))
        .stdout(predicate::str::contains("  PROJ-2 [story] P1 Ship it"));
}

#[test]
fn board_json_omits_archived_items() {
    let temp = init_temp();
    create_item(&temp, "Keep", &[]);
    let gone = create_item(&temp, "Gone", &[]);
    plank_in(&temp, &["item", "archive", &gone])
        .assert()
        .success();

    let json = json_output(&temp, &["board", "show", "-o", "json"]);
    assert_eq!(json["total_items"], 1);
    assert_eq!(keys_in(&temp, "Backlog"), vec!["PROJ-1".to_string()]);
}

#[test]
fn rank_reorders_cards() {
    let temp = init_temp();
    for summary in ["A", "B", "C"] {
        create_item(&temp, summary, &[]);
    }

    plank_in(&temp, &["board", "rank", "PROJ-3", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ranked PROJ-3 at position 0 of 3"));

    assert_eq!(
        keys_in(&temp, "Backlog"),
        vec!["PROJ-3", "PROJ-1", "PROJ-2"]
    );
}

#[test]
fn wip_limit_is_advisory() {
    let temp = init_temp();
    plank_in(&temp, &["board", "columns", "--wip", "Backlog=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0. Backlog (wip: 1, items: 0)"));

    create_item(&temp, "One", &[]);
    create_item(&temp, "Two", &[]);

    plank_in(&temp, &["board", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog (2/1) over WIP limit"));
}

#[test]
fn columns_reorder_and_collapse() {
    let temp = init_temp();
    plank_in(
        &temp,
        &[
            "board",
            "columns",
            "--order",
            "Done,Backlog,In Progress,Cancelled",
            "--collapse",
            "Cancelled",
        ],
    )
    .assert()
    .success();

    let names: Vec<String> = columns(&temp).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Done", "Backlog", "In Progress", "Cancelled"]);

    plank_in(&temp, &["board", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled (0) [collapsed]"));
}

#[test]
fn incomplete_column_order_is_rejected() {
    let temp = init_temp();
    plank_in(&temp, &["board", "columns", "--order", "Done,Backlog"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn second_board_is_selected_by_name() {
    let temp = init_temp();
    plank_in(&temp, &["board", "new", "Ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created board Ops"));

    plank_in(&temp, &["board", "show", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJ / Ops (0 items)"));

    plank_in(&temp, &["board", "show", "missing"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn project_without_board_hints_board_new() {
    let temp = init_temp();
    plank_in(&temp, &["project", "new", "WEB", "Website"])
        .assert()
        .success();

    plank_in(&temp, &["-p", "WEB", "board", "show"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("plank board new"));
}
