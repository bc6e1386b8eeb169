// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.plank/config.toml` and includes:
//! - `project`: default project key used when `--project` is omitted
//! - `workspace`: optional path to store the database in a different location
//! - `transition_policy`: `closed` (default) or `open`
//! - `max_depth`: maximum work item nesting depth
//! - `log_level`: default tracing filter when `PLANK_LOG` is unset
//! - `[users]`: display names for user references

use pk_core::hierarchy::DEFAULT_MAX_DEPTH;
use pk_core::{EngineConfig, StaticDirectory, TransitionPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const WORK_DIR_NAME: &str = ".plank";
const CONFIG_FILE_NAME: &str = "config.toml";
pub const DB_FILE_NAME: &str = "plank.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.plank/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default project key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Optional directory for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// User reference to display name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub users: BTreeMap<String, String>,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project: None,
            workspace: None,
            transition_policy: TransitionPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: None,
            users: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Creates a config whose default project is `project`.
    pub fn with_project(project: Option<String>) -> Self {
        Config {
            project,
            ..Config::default()
        }
    }

    /// Loads configuration from the given `.plank/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parses and validates configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Saves configuration to the given `.plank/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Rule engine settings derived from this config.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            transition_policy: self.transition_policy,
            max_depth: self.max_depth,
        }
    }

    /// Directory of display names from the `[users]` table.
    pub fn user_directory(&self) -> StaticDirectory {
        let mut directory = StaticDirectory::default();
        for (user_ref, name) in &self.users {
            directory.insert(user_ref.clone(), name.clone());
        }
        directory
    }
}

/// Find the .plank directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .plank directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.workspace {
        Some(workspace) => {
            let workspace_path = Path::new(workspace);
            if workspace_path.is_absolute() {
                workspace_path.join(DB_FILE_NAME)
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir
                    .parent()
                    .unwrap_or(work_dir)
                    .join(workspace)
                    .join(DB_FILE_NAME)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .plank directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore that keeps the database out of version control.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let content = format!(
        "# Database\n{db}\n{db}-wal\n{db}-shm\n",
        db = DB_FILE_NAME
    );
    fs::write(work_dir.join(GITIGNORE_FILE_NAME), content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
