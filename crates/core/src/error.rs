// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pk-core operations.

use std::fmt;
use thiserror::Error;

/// All possible errors that can occur in pk-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("{field} too short ({actual} chars, min {min})")]
    FieldTooShort {
        field: &'static str,
        actual: usize,
        min: usize,
    },

    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        actual: i64,
        min: i64,
        max: i64,
    },

    #[error("invalid {field}: '{value}'\n  hint: {hint}")]
    InvalidFormat {
        field: &'static str,
        value: String,
        hint: &'static str,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid work item type: '{0}'\n  hint: valid types are: story, bug, task, subtask")]
    InvalidWorkItemType(String),

    #[error("invalid key scope: '{0}'\n  hint: valid scopes are: epic, work_item")]
    InvalidKeyScope(String),

    #[error("invalid transition policy: '{0}'\n  hint: valid policies are: closed, open")]
    InvalidPolicy(String),

    #[error("status '{name}' is still referenced by {references}\n  hint: move them to another status first")]
    StatusInUse { name: String, references: String },

    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid hierarchy: {0}")]
    InvalidHierarchy(String),

    #[error("would create a circular hierarchy\n  hint: {item} is an ancestor of {parent}")]
    CircularHierarchy { item: String, parent: String },

    #[error("invalid status transition: cannot go from {from} to {to}\n  hint: from '{from}' you can go to: {valid_targets}")]
    InvalidTransition {
        from: String,
        to: String,
        valid_targets: String,
    },

    #[error("concurrent modification of {0}\n  hint: reload and retry the operation")]
    Conflict(String),

    #[error("permission denied: {0}")]
    Forbidden(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// Stable outward category of an [`Error`].
///
/// Front-ends map these to status codes or messages; the set and the string
/// codes are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    DuplicateKey,
    NotFound,
    InvalidHierarchy,
    CircularHierarchy,
    InvalidStatusTransition,
    Conflict,
    Forbidden,
    Storage,
}

impl ErrorKind {
    /// Returns the stable string code for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::DuplicateKey => "duplicate_key",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidHierarchy => "invalid_hierarchy",
            ErrorKind::CircularHierarchy => "circular_hierarchy",
            ErrorKind::InvalidStatusTransition => "invalid_status_transition",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Storage => "storage_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Error {
    /// Classifies this error into its outward category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FieldRequired { .. }
            | Error::FieldTooLong { .. }
            | Error::FieldTooShort { .. }
            | Error::OutOfRange { .. }
            | Error::InvalidFormat { .. }
            | Error::InvalidInput(_)
            | Error::InvalidWorkItemType(_)
            | Error::InvalidKeyScope(_)
            | Error::InvalidPolicy(_)
            | Error::StatusInUse { .. } => ErrorKind::Validation,
            Error::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidHierarchy(_) => ErrorKind::InvalidHierarchy,
            Error::CircularHierarchy { .. } => ErrorKind::CircularHierarchy,
            Error::InvalidTransition { .. } => ErrorKind::InvalidStatusTransition,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::Forbidden(_) => ErrorKind::Forbidden,
            Error::Database(_) | Error::Io(_) | Error::Json(_) | Error::CorruptedData(_) => {
                ErrorKind::Storage
            }
        }
    }

    pub(crate) fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// A specialized Result type for pk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
