// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output types.
//!
//! These differ from the core records: foreign keys are replaced by the keys
//! and names a user recognizes, and each type derives a JSON Schema for
//! `plank schema`. Boards are emitted as [`pk_core::BoardView`] directly.

use chrono::{DateTime, NaiveDate, Utc};
use pk_core::{Epic, EpicProgress, Project, Status, WorkItem, WorkItemType};
use schemars::JsonSchema;
use serde::Serialize;

/// A project as printed by `plank project list -o json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ProjectJson {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub version: i64,
}

impl From<&Project> for ProjectJson {
    fn from(p: &Project) -> Self {
        ProjectJson {
            key: p.key.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            owner: p.owner.clone(),
            is_archived: p.is_archived,
            created_at: p.created_at,
            version: p.version,
        }
    }
}

/// A status with the statuses it may move to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct StatusJson {
    pub id: i64,
    pub name: String,
    /// Display color as `#RRGGBB`.
    pub color: String,
    pub order_index: i64,
    pub is_default: bool,
    pub is_completed: bool,
    pub is_cancelled: bool,
    pub is_active: bool,
    /// Names of statuses items may move to from this one.
    pub allowed_targets: Vec<String>,
}

impl StatusJson {
    pub fn new(status: &Status, allowed_targets: Vec<String>) -> Self {
        StatusJson {
            id: status.id,
            name: status.name.clone(),
            color: status.color.clone(),
            order_index: status.order_index,
            is_default: status.is_default,
            is_completed: status.is_completed,
            is_cancelled: status.is_cancelled,
            is_active: status.is_active,
            allowed_targets,
        }
    }
}

/// Completion counts of an epic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ProgressJson {
    pub work_item_count: usize,
    pub completed_work_item_count: usize,
    pub percent_complete: u8,
}

impl From<&EpicProgress> for ProgressJson {
    fn from(p: &EpicProgress) -> Self {
        ProgressJson {
            work_item_count: p.work_item_count,
            completed_work_item_count: p.completed_work_item_count,
            percent_complete: p.percent_complete(),
        }
    }
}

/// An epic as printed by `plank epic show -o json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EpicJson {
    pub key: String,
    pub project: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub status: String,
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
    pub progress: ProgressJson,
}

impl EpicJson {
    pub fn new(epic: &Epic, project: &str, status: &str, progress: &EpicProgress) -> Self {
        EpicJson {
            key: epic.key.clone(),
            project: project.to_string(),
            summary: epic.summary.clone(),
            description: epic.description.clone(),
            assignee: epic.assignee.clone(),
            status: status.to_string(),
            priority: epic.priority,
            start_date: epic.start_date,
            due_date: epic.due_date,
            is_archived: epic.is_archived,
            created_at: epic.created_at,
            updated_at: epic.updated_at,
            version: epic.version,
            progress: progress.into(),
        }
    }
}

/// A work item as printed by `plank item show -o json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WorkItemJson {
    pub key: String,
    pub project: String,
    #[serde(rename = "type")]
    pub item_type: WorkItemType,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub status: String,
    pub priority: u8,
    /// Key of the owning epic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic: Option<String>,
    /// Key of the parent work item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Keys of direct children that are not archived.
    pub children: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

/// Resolved names for a work item's references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRefs {
    pub project: String,
    pub status: String,
    pub epic: Option<String>,
    pub parent: Option<String>,
    pub children: Vec<String>,
}

impl WorkItemJson {
    pub fn new(item: &WorkItem, refs: ItemRefs) -> Self {
        WorkItemJson {
            key: item.key.clone(),
            project: refs.project,
            item_type: item.item_type,
            summary: item.summary.clone(),
            description: item.description.clone(),
            assignee: item.assignee.clone(),
            status: refs.status,
            priority: item.priority,
            epic: refs.epic,
            parent: refs.parent,
            children: refs.children,
            order_index: item.order_index,
            is_archived: item.is_archived,
            created_at: item.created_at,
            updated_at: item.updated_at,
            version: item.version,
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
