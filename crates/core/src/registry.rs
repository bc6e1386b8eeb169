// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status registry: the ordered workflow statuses and the transition
//! allow-list between them.
//!
//! Whether a missing allow-list entry means "allowed" or "disallowed" is an
//! explicit [`TransitionPolicy`] chosen when the registry is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::status::{Status, StatusTransition};
use crate::store::PlanningStore;

/// What a missing allow-list entry means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Only explicitly allowed transitions are permitted.
    ///
    /// A newly added status is unreachable until rules are configured.
    #[default]
    Closed,
    /// Every transition is permitted unless explicitly disallowed.
    Open,
}

impl TransitionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPolicy::Closed => "closed",
            TransitionPolicy::Open => "open",
        }
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransitionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "closed" => Ok(TransitionPolicy::Closed),
            "open" => Ok(TransitionPolicy::Open),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

/// Snapshot of statuses and transitions for one operation.
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    statuses: Vec<Status>,
    rules: HashMap<(i64, i64), bool>,
    policy: TransitionPolicy,
}

impl StatusRegistry {
    pub fn new(
        mut statuses: Vec<Status>,
        transitions: &[StatusTransition],
        policy: TransitionPolicy,
    ) -> Self {
        statuses.sort_by_key(|s| (s.order_index, s.id));
        let rules = transitions
            .iter()
            .map(|t| ((t.from_status_id, t.to_status_id), t.is_allowed))
            .collect();
        StatusRegistry {
            statuses,
            rules,
            policy,
        }
    }

    /// Loads the current statuses and transitions from the store.
    pub fn load<S: PlanningStore + ?Sized>(store: &S, policy: TransitionPolicy) -> Result<Self> {
        let statuses = store.list_statuses()?;
        let transitions = store.list_transitions()?;
        Ok(Self::new(statuses, &transitions, policy))
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// All statuses in workflow order.
    pub fn ordered(&self) -> &[Status] {
        &self.statuses
    }

    /// Active statuses in workflow order.
    pub fn active(&self) -> impl Iterator<Item = &Status> {
        self.statuses.iter().filter(|s| s.is_active)
    }

    pub fn get(&self, id: i64) -> Option<&Status> {
        self.statuses.iter().find(|s| s.id == id)
    }

    /// Looks up a status by name, ignoring case.
    pub fn by_name(&self, name: &str) -> Option<&Status> {
        self.statuses
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Returns the active status with the given id.
    pub fn require_active(&self, id: i64) -> Result<&Status> {
        match self.get(id) {
            Some(status) if status.is_active => Ok(status),
            Some(status) => Err(Error::InvalidInput(format!(
                "status '{}' is inactive",
                status.name
            ))),
            None => Err(Error::not_found("status", id)),
        }
    }

    /// Returns true if an item may move from `from` to `to`.
    ///
    /// Same-status moves are always allowed. Otherwise an explicit rule
    /// decides, and without one the policy does.
    pub fn is_transition_allowed(&self, from: i64, to: i64) -> bool {
        if from == to {
            return true;
        }
        match self.rules.get(&(from, to)) {
            Some(allowed) => *allowed,
            None => self.policy == TransitionPolicy::Open,
        }
    }

    /// Active statuses reachable from `from`, in workflow order.
    pub fn valid_targets(&self, from: i64) -> Vec<&Status> {
        self.active()
            .filter(|s| s.id != from && self.is_transition_allowed(from, s.id))
            .collect()
    }

    /// Comma-separated names of [`valid_targets`](Self::valid_targets), for hints.
    pub fn valid_targets_hint(&self, from: i64) -> String {
        let names: Vec<&str> = self
            .valid_targets(from)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        }
    }

    /// Status for new epics and work items.
    ///
    /// The active status flagged default, else the first active status.
    pub fn default_status(&self) -> Result<&Status> {
        self.active()
            .find(|s| s.is_default)
            .or_else(|| self.active().next())
            .ok_or_else(|| Error::not_found("status", "default"))
    }
}

/// The statuses created by [`seed_defaults`], in workflow order.
pub fn default_statuses() -> Vec<Status> {
    vec![
        Status::new("Backlog", 0)
            .with_color("#6B7280")
            .default_for_new(),
        Status::new("In Progress", 1).with_color("#3B82F6"),
        Status::new("Done", 2).with_color("#10B981").completed(),
        Status::new("Cancelled", 3).with_color("#EF4444").cancelled(),
    ]
}

/// Allowed transitions between [`default_statuses`], as index pairs.
pub const DEFAULT_TRANSITIONS: [(usize, usize); 7] = [
    (0, 1), // Backlog -> In Progress
    (0, 3), // Backlog -> Cancelled
    (1, 0), // In Progress -> Backlog
    (1, 2), // In Progress -> Done
    (1, 3), // In Progress -> Cancelled
    (2, 1), // Done -> In Progress
    (3, 0), // Cancelled -> Backlog
];

/// Creates the default workflow if no status exists yet.
///
/// Idempotent: returns the existing statuses untouched when the registry
/// is already populated.
pub fn seed_defaults<S: PlanningStore + ?Sized>(store: &S) -> Result<Vec<Status>> {
    let seeded = store.seed_statuses(&default_statuses(), &DEFAULT_TRANSITIONS)?;
    if seeded {
        tracing::info!("seeded default statuses");
    }
    store.list_statuses()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
