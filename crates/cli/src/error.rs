// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pk_core::ErrorKind;
use thiserror::Error;

/// All errors surfaced by the `plank` command line.
///
/// Planning rule failures arrive wrapped in [`Error::Core`] and keep their
/// core message; the remaining variants cover the CLI's own concerns.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'plank init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no project selected\n  hint: pass --project KEY or set 'project' in .plank/config.toml")]
    NoProject,

    #[error("project {project} has no board\n  hint: create one with 'plank board new <name>'")]
    NoBoard { project: String },

    #[error("unknown status '{name}'\n  hint: known statuses are: {known}")]
    UnknownStatus { name: String, known: String },

    #[error("{0}")]
    Core(#[from] pk_core::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Usage and setup problems exit with 1; planning rule rejections use a
    /// distinct code per [`ErrorKind`] so scripts can branch on them.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Core(e) => match e.kind() {
                ErrorKind::Validation => 2,
                ErrorKind::DuplicateKey => 3,
                ErrorKind::NotFound => 4,
                ErrorKind::InvalidHierarchy | ErrorKind::CircularHierarchy => 5,
                ErrorKind::InvalidStatusTransition => 6,
                ErrorKind::Conflict => 7,
                ErrorKind::Forbidden => 8,
                ErrorKind::Storage => 9,
            },
            Error::UnknownStatus { .. } => 4,
            Error::Database(_) | Error::Io(_) | Error::Json(_) => 9,
            _ => 1,
        }
    }
}

/// A specialized Result type for plankrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
