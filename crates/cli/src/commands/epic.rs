// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use pk_core::{Access, Epic, NewEpic, PlanningStore};

use super::{print_output, resolve_status, Context};
use crate::cli::EpicCommand;
use crate::display::format_epic_details;
use crate::error::Result;
use crate::schema::EpicJson;

/// Optional fields of a new epic.
#[derive(Debug, Clone, Default)]
pub struct EpicOptions {
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<String>,
    pub priority: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

pub fn run(ctx: &Context, cmd: EpicCommand) -> Result<()> {
    match cmd {
        EpicCommand::New {
            summary,
            description,
            assignee,
            status,
            priority,
            start,
            due,
            output,
        } => {
            let opts = EpicOptions {
                description,
                assignee,
                status,
                priority,
                start_date: start,
                due_date: due,
            };
            let epic = create(ctx, &summary, opts)?;
            print_output(output.output, &details(ctx, &epic)?, |e| {
                format!("Created epic {}: {}\n", e.key, e.summary)
            })
        }
        EpicCommand::Show { key, output } => {
            let epic = find(ctx, &key)?;
            let directory = ctx.config.user_directory();
            print_output(output.output, &details(ctx, &epic)?, |e| {
                format_epic_details(e, &directory)
            })
        }
        EpicCommand::Archive { key } => {
            let epic = archive(ctx, &key)?;
            println!("Archived epic {}", epic.key);
            Ok(())
        }
    }
}

pub fn find(ctx: &Context, key: &str) -> Result<Epic> {
    Ok(ctx.engine().epic_by_key(&key.trim().to_uppercase())?)
}

pub fn create(ctx: &Context, summary: &str, opts: EpicOptions) -> Result<Epic> {
    let project = ctx.project()?;
    let status_id = match opts.status.as_deref() {
        Some(name) => Some(resolve_status(&ctx.registry()?, name)?.id),
        None => None,
    };
    let req = NewEpic {
        project_id: project.id,
        summary: summary.to_string(),
        description: opts.description,
        assignee: opts.assignee,
        status_id,
        priority: opts.priority,
        start_date: opts.start_date,
        due_date: opts.due_date,
    };
    Ok(ctx.engine().create_epic(Access::Allowed, &req)?)
}

pub fn archive(ctx: &Context, key: &str) -> Result<Epic> {
    let epic = find(ctx, key)?;
    Ok(ctx.engine().archive_epic(Access::Allowed, epic.id)?)
}

/// The epic with its status name and current progress.
pub fn details(ctx: &Context, epic: &Epic) -> Result<EpicJson> {
    let engine = ctx.engine();
    let project = ctx.db.get_project(epic.project_id)?;
    let registry = engine.registry()?;
    let status = registry
        .get(epic.status_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| format!("status #{}", epic.status_id));
    let progress = engine.epic_progress(epic.id)?;
    Ok(EpicJson::new(epic, &project.key, &status, &progress))
}

#[cfg(test)]
#[path = "epic_tests.rs"]
mod tests;
