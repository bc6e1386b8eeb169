// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::Mutex;

// Tests in this file mutate process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_vars_constants() {
    assert_eq!(vars::PLANK_LOG, "PLANK_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_log_filter() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var("PLANK_LOG");
    assert_eq!(log_filter(), None);

    std::env::set_var("PLANK_LOG", "pk_core=debug");
    assert_eq!(log_filter().as_deref(), Some("pk_core=debug"));

    std::env::set_var("PLANK_LOG", "  ");
    assert_eq!(log_filter(), None);
    std::env::remove_var("PLANK_LOG");
}

#[test]
fn test_no_color() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var("NO_COLOR");
    assert!(!no_color());

    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());

    std::env::set_var("NO_COLOR", "0");
    assert!(!no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_force_color() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var("COLOR");
    assert!(!force_color());

    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
}
