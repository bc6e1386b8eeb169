// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User references and their display names.
//!
//! Owners and assignees are stored as opaque user references. A
//! [`UserDirectory`] turns a reference into a name for display; the engine
//! itself never resolves them.

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

use std::collections::HashMap;
use std::process::Command;

/// Resolves user references to display names.
pub trait UserDirectory {
    /// Returns the display name for `user_ref`, if the directory knows it.
    fn display_name(&self, user_ref: &str) -> Option<String>;

    /// Display name, falling back to the reference itself.
    fn display_or_ref(&self, user_ref: &str) -> String {
        self.display_name(user_ref)
            .unwrap_or_else(|| user_ref.to_string())
    }
}

/// A fixed reference-to-name map, typically loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDirectory {
    names: HashMap<String, String>,
}

impl StaticDirectory {
    pub fn new(names: HashMap<String, String>) -> Self {
        StaticDirectory { names }
    }

    pub fn insert(&mut self, user_ref: impl Into<String>, name: impl Into<String>) {
        self.names.insert(user_ref.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl UserDirectory for StaticDirectory {
    fn display_name(&self, user_ref: &str) -> Option<String> {
        self.names.get(user_ref).cloned()
    }
}

/// Returns a user reference for the person running the process.
///
/// Resolution order:
/// 1. Git config user.name
/// 2. Unix username from USER or LOGNAME env var (if not system account)
/// 3. Fallback to "human"
pub fn current_user_name() -> String {
    if let Some(name) = git_user_name() {
        return name;
    }

    if let Some(name) = unix_username() {
        if !is_system_account(&name) {
            return name;
        }
    }

    "human".to_string()
}

fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if output.status.success() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

fn unix_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()
        .filter(|s| !s.is_empty())
}

fn is_system_account(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "root" | "system" | "administrator" | "admin" | "daemon" | "nobody"
    )
}
