// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Epics: large units of work grouping work items within a project.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A large unit of work within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    /// Database-assigned identifier.
    pub id: i64,
    pub project_id: i64,
    /// Unique key within the project (format: `{project}-EPIC-{n}`).
    pub key: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub status_id: i64,
    /// 1 (highest) to 5 (lowest).
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency token, bumped on every write.
    pub version: i64,
}

/// Request to create an epic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NewEpic {
    pub project_id: i64,
    /// Summary, 1 to 200 characters.
    pub summary: String,
    /// Optional description, at most 10000 characters.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional assignee reference, at most 100 characters.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Initial status; defaults to the registry's default status.
    #[serde(default)]
    pub status_id: Option<i64>,
    /// Priority 1 to 5; defaults to 3.
    #[serde(default)]
    pub priority: Option<u8>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Must not be before `start_date`.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Completion counts for an epic, computed from current work item state.
///
/// Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct EpicProgress {
    pub epic_id: i64,
    pub work_item_count: usize,
    pub completed_work_item_count: usize,
}

impl EpicProgress {
    /// Completed share as a whole percentage (0 when the epic is empty).
    pub fn percent_complete(&self) -> u8 {
        if self.work_item_count == 0 {
            return 0;
        }
        let pct = self.completed_work_item_count * 100 / self.work_item_count;
        u8::try_from(pct).unwrap_or(100)
    }
}

#[cfg(test)]
#[path = "epic_tests.rs"]
mod tests;
