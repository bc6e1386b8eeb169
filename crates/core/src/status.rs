// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow statuses and the transitions between them.

use serde::{Deserialize, Serialize};

/// Color used when a status is created without one.
pub const DEFAULT_STATUS_COLOR: &str = "#6B7280";

/// A named workflow state shared by every project of an installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Database-assigned identifier.
    pub id: i64,
    pub name: String,
    /// Hex color (`#RRGGBB`).
    pub color: String,
    /// Position in the workflow; lower comes first.
    pub order_index: i64,
    /// New epics and work items land here when no status is requested.
    pub is_default: bool,
    /// Items in this status count as completed.
    pub is_completed: bool,
    /// Items in this status were dropped without completion.
    pub is_cancelled: bool,
    /// Inactive statuses cannot be assigned.
    pub is_active: bool,
}

impl Status {
    /// Creates an unsaved, active status with the default color.
    pub fn new(name: impl Into<String>, order_index: i64) -> Self {
        Status {
            id: 0, // Will be set by database
            name: name.into(),
            color: DEFAULT_STATUS_COLOR.to_string(),
            order_index,
            is_default: false,
            is_completed: false,
            is_cancelled: false,
            is_active: true,
        }
    }

    /// Sets the color (builder pattern).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Marks the status as the default for new items (builder pattern).
    pub fn default_for_new(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Marks the status as completed (builder pattern).
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Marks the status as cancelled (builder pattern).
    pub fn cancelled(mut self) -> Self {
        self.is_cancelled = true;
        self
    }

    /// Returns true for completed or cancelled statuses.
    pub fn is_terminal(&self) -> bool {
        self.is_completed || self.is_cancelled
    }
}

/// An allow-list entry between two statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransition {
    pub from_status_id: i64,
    pub to_status_id: i64,
    pub is_allowed: bool,
}

/// Request to create a status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NewStatus {
    /// Status name, 1 to 50 characters, unique ignoring case.
    pub name: String,
    /// Hex color `#RRGGBB`; defaults to gray.
    #[serde(default)]
    pub color: Option<String>,
    /// Position in the workflow; defaults to after the last status.
    #[serde(default)]
    pub order_index: Option<i64>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_cancelled: bool,
}

/// Counts of entities that still point at a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReferences {
    pub epics: usize,
    pub work_items: usize,
    pub board_columns: usize,
}

impl StatusReferences {
    pub fn is_empty(&self) -> bool {
        self.epics == 0 && self.work_items == 0 && self.board_columns == 0
    }

    /// Human-readable summary, e.g. "2 work items, 1 board column".
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        for (count, one, many) in [
            (self.epics, "epic", "epics"),
            (self.work_items, "work item", "work items"),
            (self.board_columns, "board column", "board columns"),
        ] {
            match count {
                0 => {}
                1 => parts.push(format!("1 {one}")),
                n => parts.push(format!("{n} {many}")),
            }
        }
        parts.join(", ")
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
