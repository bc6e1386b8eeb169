// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use pk_core::{TransitionPolicy, WorkItemType};

pub use args::{OutputArgs, VersionArgs, WipAssignment};
use args::{date, non_empty_string, wip_assignment, work_item_type};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Transition policy as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Closed,
    Open,
}

impl From<PolicyArg> for TransitionPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Closed => TransitionPolicy::Closed,
            PolicyArg::Open => TransitionPolicy::Open,
        }
    }
}

#[derive(Parser)]
#[command(name = "plank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan projects, epics and work items on rule-checked boards")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if plank was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Project key (overrides the configured default project)
    #[arg(short = 'p', long = "project", global = true, value_name = "KEY")]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a planning database in the current directory
    #[command(after_help = colors::examples("\
Examples:
  plank init                               Initialize with default statuses
  plank init -p CORE --name \"Core\"         Also create a first project
  plank init --policy open                 Allow transitions unless denied
  plank init --workspace ../shared         Store the database elsewhere"))]
    Init {
        /// Human-readable name of the first project (requires --project)
        #[arg(long, value_parser = non_empty_string)]
        name: Option<String>,

        /// Target directory (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,

        /// Directory for the database, relative to the project root or absolute
        #[arg(long)]
        workspace: Option<String>,

        /// Transition policy for statuses without explicit rules
        #[arg(long, value_enum, default_value = "closed")]
        policy: PolicyArg,

        /// Maximum work item nesting depth
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        max_depth: u32,
    },

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Manage statuses and transition rules
    #[command(subcommand)]
    Status(StatusCommand),

    /// Manage epics
    #[command(subcommand)]
    Epic(EpicCommand),

    /// Manage work items
    #[command(subcommand)]
    Item(ItemCommand),

    /// Manage boards
    #[command(subcommand)]
    Board(BoardCommand),

    /// Output JSON Schema for commands with JSON output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  plank schema board    Output schema for 'plank board show -o json'
  plank schema item     Output schema for 'plank item show -o json'")
    )]
    Schema(SchemaCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  plank completion bash > ~/.local/share/bash-completion/completions/plank
  plank completion zsh > ~/.zfunc/_plank
  plank completion fish > ~/.config/fish/completions/plank.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Project commands.
#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Create a project
    #[command(after_help = colors::examples("\
Examples:
  plank project new CORE \"Core Platform\"           Create a project
  plank project new WEB \"Website\" --owner alice    Create with an owner"))]
    New {
        /// Project key (2-10 uppercase letters/digits, starting with a letter)
        key: String,

        /// Project name
        #[arg(value_parser = non_empty_string)]
        name: String,

        #[arg(long, short)]
        description: Option<String>,

        /// Owner user reference (defaults to the current user)
        #[arg(long)]
        owner: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List projects
    List {
        /// Include archived projects
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Archive a project
    #[command(arg_required_else_help = true)]
    Archive {
        key: String,
    },
}

/// Status commands.
#[derive(Subcommand)]
pub enum StatusCommand {
    /// List statuses and their allowed targets
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a status
    #[command(after_help = colors::examples("\
Examples:
  plank status new Review --color \"#a855f7\" --order 3
  plank status new Triage --default            New items start in Triage"))]
    New {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Display color as #RRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Position in the workflow (defaults to last)
        #[arg(long)]
        order: Option<i64>,

        /// New items start in this status
        #[arg(long)]
        default: bool,

        /// Items in this status count as completed
        #[arg(long, conflicts_with = "cancelled")]
        completed: bool,

        /// Items in this status count as cancelled
        #[arg(long)]
        cancelled: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Allow moving items from one status to another
    #[command(arg_required_else_help = true)]
    Allow { from: String, to: String },

    /// Forbid moving items from one status to another
    #[command(arg_required_else_help = true)]
    Deny { from: String, to: String },

    /// Delete a status no epic, work item or board column uses
    #[command(arg_required_else_help = true)]
    Delete { name: String },

    /// Create the default workflow if no status exists
    Seed,
}

/// Epic commands.
#[derive(Subcommand)]
pub enum EpicCommand {
    /// Create an epic
    #[command(after_help = colors::examples("\
Examples:
  plank epic new \"Checkout\"                          Create an epic
  plank epic new \"Launch\" --start 2026-01-05 --due 2026-02-01"))]
    New {
        #[arg(value_parser = non_empty_string)]
        summary: String,

        #[arg(long, short)]
        description: Option<String>,

        #[arg(long, short)]
        assignee: Option<String>,

        /// Initial status (defaults to the default status)
        #[arg(long, short)]
        status: Option<String>,

        /// Priority from 1 (highest) to 5 (lowest)
        #[arg(long)]
        priority: Option<u8>,

        /// Start date (YYYY-MM-DD)
        #[arg(long, value_parser = date)]
        start: Option<NaiveDate>,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = date)]
        due: Option<NaiveDate>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show an epic with its progress
    #[command(arg_required_else_help = true)]
    Show {
        key: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Archive an epic
    #[command(arg_required_else_help = true)]
    Archive { key: String },
}

/// Work item commands.
#[derive(Subcommand)]
pub enum ItemCommand {
    /// Create a work item
    #[command(after_help = colors::examples("\
Examples:
  plank item new \"Fix login\" -t bug               Create a bug
  plank item new \"Write tests\" --parent CORE-1    Create a subtask
  plank item new \"Cart\" -t story --epic CORE-EPIC-1"))]
    New {
        #[arg(value_parser = non_empty_string)]
        summary: String,

        /// Type (story, bug, task, subtask)
        #[arg(long = "type", short = 't', value_parser = work_item_type)]
        item_type: Option<WorkItemType>,

        #[arg(long, short)]
        description: Option<String>,

        #[arg(long, short)]
        assignee: Option<String>,

        /// Initial status (defaults to the default status)
        #[arg(long, short)]
        status: Option<String>,

        /// Priority from 1 (highest) to 5 (lowest)
        #[arg(long)]
        priority: Option<u8>,

        /// Epic key
        #[arg(long)]
        epic: Option<String>,

        /// Parent work item key
        #[arg(long)]
        parent: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Edit a work item's fields
    #[command(arg_required_else_help = true)]
    Edit {
        key: String,

        #[arg(long, value_parser = non_empty_string)]
        summary: Option<String>,

        #[arg(long, short)]
        description: Option<String>,

        #[arg(long, short, conflicts_with = "unassign")]
        assignee: Option<String>,

        /// Clear the assignee
        #[arg(long)]
        unassign: bool,

        #[arg(long = "type", short = 't', value_parser = work_item_type)]
        item_type: Option<WorkItemType>,

        #[arg(long)]
        priority: Option<u8>,

        #[arg(long, conflicts_with = "no_epic")]
        epic: Option<String>,

        /// Detach from its epic
        #[arg(long)]
        no_epic: bool,

        #[arg(long, conflicts_with = "no_parent")]
        parent: Option<String>,

        /// Make it a top-level item
        #[arg(long)]
        no_parent: bool,

        #[command(flatten)]
        version: VersionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Move a work item to another status
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  plank item move CORE-3 \"In Progress\"           Start work
  plank item move CORE-3 Done --order 0          Move to the top of Done")
    )]
    Move {
        key: String,

        /// Target status name
        status: String,

        /// Order index within the target column
        #[arg(long)]
        order: Option<i64>,

        #[command(flatten)]
        version: VersionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a work item
    #[command(arg_required_else_help = true)]
    Show {
        key: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Archive a work item
    #[command(arg_required_else_help = true)]
    Archive { key: String },
}

/// Board commands.
#[derive(Subcommand)]
pub enum BoardCommand {
    /// Create a board with one column per active status
    #[command(arg_required_else_help = true)]
    New {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Mark as the project's default board
        #[arg(long)]
        default: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a board (defaults to the project's default board)
    Show {
        /// Board name or id
        board: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show or configure board columns
    #[command(after_help = colors::examples("\
Examples:
  plank board columns                              List columns
  plank board columns --wip \"In Progress\"=3        Set a WIP limit
  plank board columns --wip Review=none            Clear a WIP limit
  plank board columns --collapse Cancelled         Collapse a column
  plank board columns --order Backlog,Done,\"In Progress\",Cancelled"))]
    Columns {
        /// Board name or id
        board: Option<String>,

        /// New column order as comma-separated status names
        #[arg(long, value_delimiter = ',')]
        order: Vec<String>,

        /// Set a WIP limit (STATUS=N or STATUS=none)
        #[arg(long, value_parser = wip_assignment)]
        wip: Vec<WipAssignment>,

        /// Collapse the column of a status
        #[arg(long)]
        collapse: Vec<String>,

        /// Expand the column of a status
        #[arg(long)]
        expand: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Place a card at a position within its column
    #[command(arg_required_else_help = true)]
    Rank {
        /// Work item key
        key: String,

        /// Zero-based position; positions past the end append
        position: usize,
    },
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'plank project list -o json'
    Project,
    /// Output JSON Schema for 'plank status list -o json'
    Status,
    /// Output JSON Schema for 'plank epic show -o json'
    Epic,
    /// Output JSON Schema for 'plank item show -o json'
    Item,
    /// Output JSON Schema for 'plank board show -o json'
    Board,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
