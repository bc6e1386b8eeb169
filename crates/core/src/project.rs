// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Projects: the top-level container for planning work.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A planning project, identified by a short uppercase key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Database-assigned identifier.
    pub id: i64,
    /// Unique key (e.g. "PROJ"), used as the prefix of epic and work item keys.
    pub key: String,
    /// Display name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User reference of the owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub is_active: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency token, bumped on every write.
    pub version: i64,
}

impl Project {
    /// Creates an unsaved, active project.
    pub fn new(key: String, name: String, created_at: DateTime<Utc>) -> Self {
        Project {
            id: 0, // Will be set by database
            key,
            name,
            description: None,
            owner: None,
            is_active: true,
            is_archived: false,
            created_at,
            updated_at: created_at,
            version: 1,
        }
    }
}

/// Request to create a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NewProject {
    /// Project key: `^[A-Z][A-Z0-9]*$`, 2 to 10 characters.
    pub key: String,
    /// Display name, 1 to 100 characters.
    pub name: String,
    /// Optional description, at most 2000 characters.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional owner reference, at most 100 characters.
    #[serde(default)]
    pub owner: Option<String>,
}
