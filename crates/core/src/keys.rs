// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable key assignment for epics and work items.
//!
//! Keys are `{project}-{n}` for work items and `{project}-EPIC-{n}` for
//! epics. `n` comes from a persisted per-(project, scope) counter that is
//! incremented atomically by the store, so keys are never reused even after
//! the entity that held them is archived.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Counter namespace within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScope {
    Epic,
    WorkItem,
}

impl KeyScope {
    /// Returns the string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyScope::Epic => "epic",
            KeyScope::WorkItem => "work_item",
        }
    }

    /// Segment inserted between the project key and the number.
    pub fn prefix(&self) -> &'static str {
        match self {
            KeyScope::Epic => "EPIC-",
            KeyScope::WorkItem => "",
        }
    }
}

impl fmt::Display for KeyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeyScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "epic" => Ok(KeyScope::Epic),
            "work_item" | "work-item" => Ok(KeyScope::WorkItem),
            _ => Err(Error::InvalidKeyScope(s.to_string())),
        }
    }
}

/// Persisted key counters.
///
/// Implementations must increment and return the new value in a single
/// atomic step; two callers must never observe the same value.
pub trait KeyCounterStore {
    /// Increments the counter for `(project_key, scope)` and returns the new
    /// value, starting at 1. Returns [`Error::Conflict`] when the storage
    /// layer reports a concurrent-write collision.
    fn increment_key_counter(&self, project_key: &str, scope: KeyScope) -> Result<u64>;

    /// Returns the last issued value, 0 if none was issued.
    fn current_key_counter(&self, project_key: &str, scope: KeyScope) -> Result<u64>;
}

/// Formats a key from its parts.
pub fn format_key(project_key: &str, scope: KeyScope, n: u64) -> String {
    format!("{}-{}{}", project_key, scope.prefix(), n)
}

/// Splits a key into `(project_key, scope, n)`.
///
/// Returns `None` if the key is not in either key format.
pub fn parse_key(key: &str) -> Option<(String, KeyScope, u64)> {
    let (head, number) = key.rsplit_once('-')?;
    let n: u64 = number.parse().ok().filter(|n| *n >= 1)?;
    if let Some(project) = head.strip_suffix("-EPIC") {
        if !project.is_empty() && !project.contains('-') {
            return Some((project.to_string(), KeyScope::Epic, n));
        }
        return None;
    }
    if head.is_empty() || head.contains('-') {
        return None;
    }
    Some((head.to_string(), KeyScope::WorkItem, n))
}

/// Issues keys from a [`KeyCounterStore`].
pub struct KeyGenerator<'a, S: KeyCounterStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyCounterStore + ?Sized> KeyGenerator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        KeyGenerator { store }
    }

    /// Returns the next unused key for the project and scope.
    pub fn next_key(&self, project_key: &str, scope: KeyScope) -> Result<String> {
        let n = self.store.increment_key_counter(project_key, scope)?;
        let key = format_key(project_key, scope, n);
        tracing::debug!(%key, "issued key");
        Ok(key)
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
