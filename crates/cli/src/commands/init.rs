// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use pk_core::identity::current_user_name;
use pk_core::validate::validate_project_key;
use pk_core::{Access, Database, NewBoard, NewProject, PlanningEngine, Project, SystemClock};

use crate::cli::PolicyArg;
use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::{Error, Result};

/// Name of the board created alongside the first project.
pub const DEFAULT_BOARD_NAME: &str = "Board";

/// Settings for a fresh `.plank/` directory.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub project: Option<String>,
    pub name: Option<String>,
    pub workspace: Option<String>,
    pub policy: Option<PolicyArg>,
    pub max_depth: Option<usize>,
}

/// What `init` created.
#[derive(Debug)]
pub struct Initialized {
    pub work_dir: PathBuf,
    pub db_path: PathBuf,
    pub project: Option<Project>,
}

pub fn run(path: Option<String>, opts: InitOptions) -> Result<()> {
    let target = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let done = init_at(&target, opts)?;

    println!(
        "Initialized planning database at {}",
        done.db_path.display()
    );
    if let Some(project) = done.project {
        println!("Project: {} ({})", project.key, project.name);
    }
    Ok(())
}

/// Creates `.plank/` under `target`, seeds the default workflow and, when a
/// project key is given, the first project with a default board.
pub fn init_at(target: &Path, opts: InitOptions) -> Result<Initialized> {
    let key = opts.project.as_deref().map(|k| k.trim().to_uppercase());
    if let Some(ref key) = key {
        validate_project_key(key)?;
    } else if opts.name.is_some() {
        return Err(Error::NoProject);
    }

    let mut config = Config::with_project(key.clone());
    config.workspace = opts.workspace;
    if let Some(policy) = opts.policy {
        config.transition_policy = policy.into();
    }
    if let Some(depth) = opts.max_depth {
        config.max_depth = depth;
    }

    let work_dir = init_work_dir(target, &config)?;
    write_gitignore(&work_dir)?;

    let db_path = get_db_path(&work_dir, &config);
    let db = Database::open(&db_path)?;
    let engine = PlanningEngine::new(&db, SystemClock, config.engine_config());
    engine.seed_statuses(Access::Allowed)?;

    let project = match key {
        Some(key) => {
            let name = opts.name.unwrap_or_else(|| key.clone());
            let project = engine.create_project(
                Access::Allowed,
                &NewProject {
                    key,
                    name,
                    description: None,
                    owner: Some(current_user_name()),
                },
            )?;
            engine.create_board(
                Access::Allowed,
                &NewBoard {
                    project_id: project.id,
                    name: DEFAULT_BOARD_NAME.to_string(),
                    is_default: true,
                },
            )?;
            Some(project)
        }
        None => None,
    };

    Ok(Initialized {
        work_dir,
        db_path,
        project,
    })
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
