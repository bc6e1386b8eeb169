// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod board;
pub mod epic;
pub mod init;
pub mod item;
pub mod project;
pub mod schema;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use pk_core::{
    Board, Database, PlanningEngine, PlanningStore, Project, Status, StatusRegistry, SystemClock,
};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// Everything a command needs: the store, the loaded configuration and the
/// project selected on the command line.
pub struct Context {
    pub db: Database,
    pub config: Config,
    pub project_override: Option<String>,
}

impl Context {
    /// Opens the database of the enclosing `.plank/` directory.
    pub fn open(project_override: Option<String>) -> Result<Self> {
        let work_dir = find_work_dir()?;
        let config = Config::load(&work_dir)?;
        let db = Database::open(&get_db_path(&work_dir, &config))?;
        Ok(Context {
            db,
            config,
            project_override,
        })
    }

    pub fn engine(&self) -> PlanningEngine<'_, Database, SystemClock> {
        PlanningEngine::new(&self.db, SystemClock, self.config.engine_config())
    }

    /// The selected project: `--project`, else the configured default.
    pub fn project(&self) -> Result<Project> {
        let key = self
            .project_override
            .as_deref()
            .or(self.config.project.as_deref())
            .ok_or(Error::NoProject)?;
        Ok(self.engine().project_by_key(&key.trim().to_uppercase())?)
    }

    pub fn registry(&self) -> Result<StatusRegistry> {
        Ok(self.engine().registry()?)
    }

    /// Resolves a board by name or id within `project`, defaulting to the
    /// project's default board, then its oldest board.
    pub fn board(&self, project: &Project, name_or_id: Option<&str>) -> Result<Board> {
        let boards = self.db.list_boards(project.id)?;
        let found = match name_or_id {
            Some(wanted) => boards.into_iter().find(|b| {
                b.name.eq_ignore_ascii_case(wanted)
                    || wanted.parse::<i64>().is_ok_and(|id| id == b.id)
            }),
            None => boards
                .iter()
                .find(|b| b.is_default)
                .or_else(|| boards.first())
                .cloned(),
        };
        found.ok_or_else(|| match name_or_id {
            Some(wanted) => Error::Core(pk_core::Error::NotFound {
                entity: "board",
                id: wanted.to_string(),
            }),
            None => Error::NoBoard {
                project: project.key.clone(),
            },
        })
    }
}

/// Looks up an active status by name, case-insensitively.
pub fn resolve_status<'r>(registry: &'r StatusRegistry, name: &str) -> Result<&'r Status> {
    registry
        .by_name(name.trim())
        .filter(|s| s.is_active)
        .ok_or_else(|| Error::UnknownStatus {
            name: name.to_string(),
            known: registry
                .active()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Prints `value` as JSON, or the text rendering otherwise.
pub fn print_output<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text(value)),
    }
    Ok(())
}
