// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use yare::parameterized;

#[test]
fn create_normalizes_key() {
    let ctx = TestContext::new();
    let project = create(&ctx, " web ", "Website", None, Some("alice".into())).unwrap();
    assert_eq!(project.key, "WEB");
    assert_eq!(project.owner.as_deref(), Some("alice"));
    assert_eq!(project.version, 1);
}

#[test]
fn create_duplicate_key_fails() {
    let ctx = TestContext::new();
    let err = create(&ctx, "PROJ", "Again", None, None).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}

#[parameterized(
    too_short = { "P" },
    leading_digit = { "1AB" },
    punctuation = { "AB-C" },
)]
fn create_rejects_invalid_key(key: &str) {
    let ctx = TestContext::new();
    let err = create(&ctx, key, "Bad", None, None).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn list_hides_archived_unless_requested() {
    let ctx = TestContext::new();
    create(&ctx, "ZED", "Last", None, None).unwrap();
    create(&ctx, "ABC", "First", None, None).unwrap();
    archive(&ctx, "zed").unwrap();

    let keys: Vec<String> = list(&ctx, false).unwrap().into_iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["ABC", "PROJ"]);

    let keys: Vec<String> = list(&ctx, true).unwrap().into_iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["ABC", "PROJ", "ZED"]);
}

#[test]
fn archive_bumps_version() {
    let ctx = TestContext::new();
    let project = archive(&ctx, "PROJ").unwrap();
    assert!(project.is_archived);
    assert_eq!(project.version, 2);
}

#[test]
fn archive_unknown_project() {
    let ctx = TestContext::new();
    let err = archive(&ctx, "NOPE").unwrap_err();
    assert!(err.to_string().contains("NOPE"));
}
