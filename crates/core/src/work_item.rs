// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work items: stories, bugs, tasks and subtasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of work items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum WorkItemType {
    /// User-facing functionality.
    Story,
    /// Defect to fix.
    Bug,
    /// Standard unit of work.
    Task,
    /// Child of another work item.
    Subtask,
}

impl WorkItemType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemType::Story => "story",
            WorkItemType::Bug => "bug",
            WorkItemType::Task => "task",
            WorkItemType::Subtask => "subtask",
        }
    }
}

impl fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "story" => Ok(WorkItemType::Story),
            "bug" => Ok(WorkItemType::Bug),
            "task" => Ok(WorkItemType::Task),
            "subtask" | "sub-task" => Ok(WorkItemType::Subtask),
            _ => Err(Error::InvalidWorkItemType(s.to_string())),
        }
    }
}

/// An individual piece of work, optionally nested under a parent item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Database-assigned identifier.
    pub id: i64,
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<i64>,
    /// Unique key within the project (format: `{project}-{n}`).
    pub key: String,
    pub item_type: WorkItemType,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub status_id: i64,
    /// 1 (highest) to 5 (lowest).
    pub priority: u8,
    /// Parent work item id; stored as an id, never as an owning reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Card position within its board column; unset items sort last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency token, bumped on every write.
    pub version: i64,
}

/// Request to create a work item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NewWorkItem {
    pub project_id: i64,
    /// Epic in the same project.
    #[serde(default)]
    pub epic_id: Option<i64>,
    /// Defaults to `subtask` when a parent is given, `task` otherwise.
    #[serde(default)]
    pub item_type: Option<WorkItemType>,
    /// Summary, 1 to 500 characters.
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
    /// Parent work item in the same project.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Partial update of a work item.
///
/// Outer `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItemPatch {
    pub summary: Option<String>,
    pub description: Option<Option<String>>,
    pub assignee: Option<Option<String>>,
    pub item_type: Option<WorkItemType>,
    pub priority: Option<u8>,
    pub epic_id: Option<Option<i64>>,
    pub parent_id: Option<Option<i64>>,
    /// Rejects the update with `Conflict` if the stored version differs.
    pub expected_version: Option<i64>,
}

impl WorkItemPatch {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.description.is_none()
            && self.assignee.is_none()
            && self.item_type.is_none()
            && self.priority.is_none()
            && self.epic_id.is_none()
            && self.parent_id.is_none()
    }
}

/// Request to move a work item to another status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MoveWorkItem {
    pub to_status_id: i64,
    /// Position within the destination column, applied even when the
    /// status does not change.
    #[serde(default)]
    pub order_index: Option<i64>,
    #[serde(default)]
    pub expected_version: Option<i64>,
}

#[cfg(test)]
#[path = "work_item_tests.rs"]
mod tests;
