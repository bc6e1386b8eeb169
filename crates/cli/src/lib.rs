// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! plankrs - the library behind the `plank` command line.
//!
//! Planning rules live in `pk-core`; this crate adds the `.plank/`
//! configuration directory, argument parsing and text/JSON rendering.
//!
//! # Main Components
//!
//! - [`Cli`] - clap definition of every command
//! - [`Config`] - `.plank/config.toml` (default project, policy, depth)
//! - [`Error`] - CLI errors with per-kind exit codes
//!
//! ```rust,ignore
//! use clap::Parser;
//! use plankrs::{run, Cli};
//!
//! run(Cli::parse())?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
mod env;
pub mod error;
pub mod help;
mod logging;
mod schema;

pub use cli::{
    BoardCommand, Cli, Command, EpicCommand, ItemCommand, OutputFormat, PolicyArg,
    ProjectCommand, SchemaCommand, StatusCommand,
};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::debug;

use commands::init::InitOptions;
use commands::Context;

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(dir) = cli.directory.as_deref() {
        std::env::set_current_dir(dir)?;
    }
    let project = cli.project;

    match cli.command {
        Command::Init {
            name,
            path,
            workspace,
            policy,
            max_depth,
        } => {
            logging::init(None);
            let opts = InitOptions {
                project,
                name,
                workspace,
                policy: Some(policy),
                max_depth: Some(max_depth as usize),
            };
            commands::init::run(path, opts)
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "plank", &mut std::io::stdout());
            Ok(())
        }
        Command::Project(cmd) => commands::project::run(&open(project)?, cmd),
        Command::Status(cmd) => commands::status::run(&open(project)?, cmd),
        Command::Epic(cmd) => commands::epic::run(&open(project)?, cmd),
        Command::Item(cmd) => commands::item::run(&open(project)?, cmd),
        Command::Board(cmd) => commands::board::run(&open(project)?, cmd),
    }
}

fn open(project: Option<String>) -> Result<Context> {
    let ctx = Context::open(project)?;
    logging::init(ctx.config.log_level.as_deref());
    debug!(
        project = ?ctx.config.project,
        policy = ?ctx.config.transition_policy,
        "opened planning database"
    );
    Ok(ctx)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
