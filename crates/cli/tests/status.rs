// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn list_shows_default_workflow() {
    let temp = init_temp();
    plank_in(&temp, &["status", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0. Backlog #6B7280 [default] -> In Progress, Cancelled",
        ))
        .stdout(predicate::str::contains("2. Done #10B981 [completed] -> In Progress"));
}

#[test]
fn list_json_includes_targets() {
    let temp = init_temp();
    let json = json_output(&temp, &["status", "list", "-o", "json"]);
    let statuses = json.as_array().unwrap();
    assert_eq!(statuses.len(), 4);
    assert_eq!(statuses[3]["name"], "Cancelled");
    assert_eq!(statuses[3]["allowed_targets"], serde_json::json!(["Backlog"]));
}

#[test]
fn new_status_is_unreachable_until_allowed() {
    let temp = init_temp();
    plank_in(&temp, &["status", "new", "Review", "--color", "#A855F7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created status Review"));

    let key = create_item(&temp, "Task", &["-s", "In Progress"]);
    plank_in(&temp, &["item", "move", &key, "Review"])
        .assert()
        .failure()
        .code(6);

    plank_in(&temp, &["status", "allow", "In Progress", "Review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allowed In Progress -> Review"));
    plank_in(&temp, &["item", "move", &key, "Review"])
        .assert()
        .success();

    plank_in(&temp, &["status", "deny", "In Progress", "Review"])
        .assert()
        .success();
}

#[test]
fn open_policy_allows_unlisted_transitions() {
    let temp = TempDir::new().unwrap();
    plank_in(&temp, &["init", "-p", "PROJ", "--policy", "open"])
        .assert()
        .success();
    let key = create_item(&temp, "Task", &[]);

    plank_in(&temp, &["item", "move", &key, "Done"])
        .assert()
        .success();
}

#[test]
fn duplicate_status_name_is_rejected() {
    let temp = init_temp();
    plank_in(&temp, &["status", "new", "backlog"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn status_in_use_cannot_be_deleted() {
    let temp = init_temp();
    create_item(&temp, "Task", &[]);
    plank_in(&temp, &["status", "delete", "Backlog"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unused_status_can_be_deleted() {
    let temp = TempDir::new().unwrap();
    plank_in(&temp, &["init"]).assert().success();
    plank_in(&temp, &["status", "new", "Review"])
        .assert()
        .success();
    plank_in(&temp, &["status", "delete", "review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted status Review"));
}

#[test]
fn seed_is_idempotent() {
    let temp = init_temp();
    plank_in(&temp, &["status", "seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Statuses: Backlog, In Progress, Done, Cancelled",
        ));
}
