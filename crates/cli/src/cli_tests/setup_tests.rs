// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn parse_init_defaults() {
    let cli = parse(&["plank", "init"]).unwrap();
    let Command::Init {
        name,
        path,
        workspace,
        policy,
        max_depth,
    } = cli.command
    else {
        unreachable!("expected init");
    };
    assert!(name.is_none());
    assert!(path.is_none());
    assert!(workspace.is_none());
    assert_eq!(policy, PolicyArg::Closed);
    assert_eq!(max_depth, 1);
}

#[test]
fn parse_init_with_options() {
    let cli = parse(&[
        "plank", "init", "-p", "CORE", "--name", "Core", "--policy", "open", "--max-depth", "2",
    ])
    .unwrap();
    assert_eq!(cli.project.as_deref(), Some("CORE"));
    let Command::Init {
        name,
        policy,
        max_depth,
        ..
    } = cli.command
    else {
        unreachable!("expected init");
    };
    assert_eq!(name.as_deref(), Some("Core"));
    assert_eq!(policy, PolicyArg::Open);
    assert_eq!(max_depth, 2);
    assert_eq!(TransitionPolicy::from(policy), TransitionPolicy::Open);
}

#[test]
fn parse_init_rejects_zero_depth() {
    assert!(parse(&["plank", "init", "--max-depth", "0"]).is_err());
}

#[test]
fn parse_status_new_flags() {
    let cli = parse(&[
        "plank", "status", "new", "Review", "--color", "#A855F7", "--order", "2", "--default",
    ])
    .unwrap();
    let Command::Status(StatusCommand::New {
        name,
        color,
        order,
        default,
        completed,
        cancelled,
        ..
    }) = cli.command
    else {
        unreachable!("expected status new");
    };
    assert_eq!(name, "Review");
    assert_eq!(color.as_deref(), Some("#A855F7"));
    assert_eq!(order, Some(2));
    assert!(default);
    assert!(!completed);
    assert!(!cancelled);
}

#[test]
fn parse_status_completed_conflicts_with_cancelled() {
    let result = parse(&["plank", "status", "new", "X", "--completed", "--cancelled"]);
    assert!(result.is_err());
}

#[test]
fn parse_status_allow() {
    let cli = parse(&["plank", "status", "allow", "Done", "Backlog"]).unwrap();
    let Command::Status(StatusCommand::Allow { from, to }) = cli.command else {
        unreachable!("expected status allow");
    };
    assert_eq!((from.as_str(), to.as_str()), ("Done", "Backlog"));
}

#[test]
fn parse_project_new() {
    let cli = parse(&["plank", "project", "new", "WEB", "Website", "--owner", "alice"]).unwrap();
    let Command::Project(ProjectCommand::New {
        key, name, owner, ..
    }) = cli.command
    else {
        unreachable!("expected project new");
    };
    assert_eq!(key, "WEB");
    assert_eq!(name, "Website");
    assert_eq!(owner.as_deref(), Some("alice"));
}

#[test]
fn parse_project_new_blank_name_fails() {
    assert!(parse(&["plank", "project", "new", "WEB", "  "]).is_err());
}

#[test]
fn parse_epic_new_dates() {
    let cli = parse(&[
        "plank", "epic", "new", "Launch", "--start", "2026-01-05", "--due", "2026-02-01",
    ])
    .unwrap();
    let Command::Epic(EpicCommand::New { start, due, .. }) = cli.command else {
        unreachable!("expected epic new");
    };
    assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 5));
    assert_eq!(due, NaiveDate::from_ymd_opt(2026, 2, 1));
}

#[test]
fn parse_epic_new_bad_date_fails() {
    let err = parse(&["plank", "epic", "new", "Launch", "--due", "01/02/2026"])
        .err()
        .unwrap();
    assert!(err.to_string().contains("YYYY-MM-DD"));
}

#[test]
fn parse_schema_and_completion() {
    let cli = parse(&["plank", "schema", "board"]).unwrap();
    assert!(matches!(cli.command, Command::Schema(SchemaCommand::Board)));

    let cli = parse(&["plank", "completion", "zsh"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Completion { shell: Shell::Zsh }
    ));
}
