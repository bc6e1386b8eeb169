// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::Mutex;
use yare::parameterized;

// Serializes tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn save(keys: &[&'static str]) -> Self {
        EnvGuard {
            saved: keys.iter().map(|k| (*k, std::env::var(k).ok())).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[parameterized(
    root = { "root", true },
    upper = { "ROOT", true },
    admin = { "Administrator", true },
    nobody = { "nobody", true },
    alice = { "alice", false },
    bob = { "bob", false },
)]
fn system_accounts(name: &str, expected: bool) {
    assert_eq!(is_system_account(name), expected);
}

#[test]
fn current_user_name_is_never_empty() {
    assert!(!current_user_name().is_empty());
}

#[test]
fn unix_username_prefers_user() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let _env = EnvGuard::save(&["USER", "LOGNAME"]);

    std::env::set_var("USER", "testuser");
    std::env::set_var("LOGNAME", "other");
    assert_eq!(unix_username(), Some("testuser".to_string()));
}

#[test]
fn unix_username_falls_back_to_logname() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let _env = EnvGuard::save(&["USER", "LOGNAME"]);

    std::env::remove_var("USER");
    std::env::set_var("LOGNAME", "testlogname");
    assert_eq!(unix_username(), Some("testlogname".to_string()));
}

#[test]
fn unix_username_empty_is_none() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let _env = EnvGuard::save(&["USER", "LOGNAME"]);

    std::env::set_var("USER", "");
    std::env::remove_var("LOGNAME");
    assert_eq!(unix_username(), None);
}

#[test]
fn static_directory_resolves_known_refs() {
    let mut dir = StaticDirectory::default();
    assert!(dir.is_empty());
    dir.insert("u-42", "Alice Liddell");

    assert_eq!(dir.display_name("u-42").as_deref(), Some("Alice Liddell"));
    assert_eq!(dir.display_name("u-7"), None);
    assert_eq!(dir.display_or_ref("u-42"), "Alice Liddell");
    assert_eq!(dir.display_or_ref("u-7"), "u-7");
    assert_eq!(dir.len(), 1);
}
