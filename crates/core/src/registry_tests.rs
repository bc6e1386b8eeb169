// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::db::Database;
use yare::parameterized;

fn status(id: i64, name: &str, order_index: i64) -> Status {
    let mut status = Status::new(name, order_index);
    status.id = id;
    status
}

fn allow(from: i64, to: i64) -> StatusTransition {
    StatusTransition {
        from_status_id: from,
        to_status_id: to,
        is_allowed: true,
    }
}

fn deny(from: i64, to: i64) -> StatusTransition {
    StatusTransition {
        from_status_id: from,
        to_status_id: to,
        is_allowed: false,
    }
}

/// Backlog(1), In Progress(2), Done(3); 1->2 and 2->3 allowed, 3->1 denied.
fn registry(policy: TransitionPolicy) -> StatusRegistry {
    StatusRegistry::new(
        vec![
            status(3, "Done", 2),
            status(1, "Backlog", 0),
            status(2, "In Progress", 1),
        ],
        &[allow(1, 2), allow(2, 3), deny(3, 1)],
        policy,
    )
}

#[parameterized(
    closed = { "closed", TransitionPolicy::Closed },
    open = { "open", TransitionPolicy::Open },
    upper = { "OPEN", TransitionPolicy::Open },
)]
fn policy_from_str(input: &str, expected: TransitionPolicy) {
    assert_eq!(input.parse::<TransitionPolicy>().unwrap(), expected);
}

#[test]
fn policy_from_str_invalid() {
    assert!(matches!(
        "lenient".parse::<TransitionPolicy>(),
        Err(Error::InvalidPolicy(_))
    ));
}

#[test]
fn policy_defaults_to_closed() {
    assert_eq!(TransitionPolicy::default(), TransitionPolicy::Closed);
}

#[parameterized(
    explicit_allow = { 1, 2, true },
    explicit_allow_2 = { 2, 3, true },
    explicit_deny = { 3, 1, false },
    missing_rule = { 1, 3, false },
    missing_reverse = { 2, 1, false },
    same_status = { 1, 1, true },
    same_status_denied_elsewhere = { 3, 3, true },
)]
fn closed_policy_transitions(from: i64, to: i64, expected: bool) {
    assert_eq!(
        registry(TransitionPolicy::Closed).is_transition_allowed(from, to),
        expected
    );
}

#[parameterized(
    explicit_allow = { 1, 2, true },
    explicit_deny = { 3, 1, false },
    missing_rule = { 1, 3, true },
    same_status = { 2, 2, true },
)]
fn open_policy_transitions(from: i64, to: i64, expected: bool) {
    assert_eq!(
        registry(TransitionPolicy::Open).is_transition_allowed(from, to),
        expected
    );
}

#[test]
fn statuses_are_ordered() {
    let reg = registry(TransitionPolicy::Closed);
    let names: Vec<&str> = reg.ordered().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Backlog", "In Progress", "Done"]);
}

#[test]
fn valid_targets_hint_lists_reachable() {
    let reg = registry(TransitionPolicy::Closed);
    assert_eq!(reg.valid_targets_hint(1), "In Progress");
    assert_eq!(reg.valid_targets_hint(3), "(none)");
    let open = registry(TransitionPolicy::Open);
    assert_eq!(open.valid_targets_hint(1), "In Progress, Done");
}

#[test]
fn default_status_prefers_flag() {
    let mut statuses = vec![status(1, "Backlog", 0), status(2, "Todo", 1)];
    statuses[1].is_default = true;
    let reg = StatusRegistry::new(statuses, &[], TransitionPolicy::Closed);
    assert_eq!(reg.default_status().unwrap().name, "Todo");
}

#[test]
fn default_status_falls_back_to_first_active() {
    let mut statuses = vec![status(1, "Archived", 0), status(2, "Todo", 1)];
    statuses[0].is_active = false;
    let reg = StatusRegistry::new(statuses, &[], TransitionPolicy::Closed);
    assert_eq!(reg.default_status().unwrap().name, "Todo");
}

#[test]
fn default_status_empty_registry() {
    let reg = StatusRegistry::new(vec![], &[], TransitionPolicy::Closed);
    assert!(matches!(reg.default_status(), Err(Error::NotFound { .. })));
}

#[test]
fn require_active_rejects_inactive_and_missing() {
    let mut statuses = vec![status(1, "Old", 0)];
    statuses[0].is_active = false;
    let reg = StatusRegistry::new(statuses, &[], TransitionPolicy::Closed);
    assert!(matches!(reg.require_active(1), Err(Error::InvalidInput(_))));
    assert!(matches!(reg.require_active(9), Err(Error::NotFound { .. })));
}

#[test]
fn by_name_ignores_case() {
    let reg = registry(TransitionPolicy::Closed);
    assert_eq!(reg.by_name("in progress").unwrap().id, 2);
    assert!(reg.by_name("Review").is_none());
}

#[test]
fn seed_defaults_creates_workflow_once() {
    let db = Database::open_in_memory().unwrap();

    let first = seed_defaults(&db).unwrap();
    let names: Vec<&str> = first.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Backlog", "In Progress", "Done", "Cancelled"]);
    assert!(first[0].is_default);
    assert!(first[2].is_completed);
    assert!(first[3].is_cancelled);

    let second = seed_defaults(&db).unwrap();
    assert_eq!(first, second);
    assert_eq!(db.list_transitions().unwrap().len(), DEFAULT_TRANSITIONS.len());
}

#[test]
fn seed_defaults_skips_populated_registry() {
    let db = Database::open_in_memory().unwrap();
    db.insert_status(&Status::new("Todo", 0)).unwrap();

    let statuses = seed_defaults(&db).unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].name, "Todo");
}

#[test]
fn seeded_transitions_behave() {
    let db = Database::open_in_memory().unwrap();
    seed_defaults(&db).unwrap();
    let reg = StatusRegistry::load(&db, TransitionPolicy::Closed).unwrap();

    let id = |name: &str| reg.by_name(name).unwrap().id;
    assert!(reg.is_transition_allowed(id("Backlog"), id("In Progress")));
    assert!(reg.is_transition_allowed(id("In Progress"), id("Done")));
    assert!(!reg.is_transition_allowed(id("Backlog"), id("Done")));
    assert!(!reg.is_transition_allowed(id("Done"), id("Cancelled")));
}
