// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pk_core::{Access, NewStatus, Status, StatusTransition};

use super::{print_output, resolve_status, Context};
use crate::cli::StatusCommand;
use crate::display::format_status_line;
use crate::error::Result;
use crate::schema::StatusJson;

pub fn run(ctx: &Context, cmd: StatusCommand) -> Result<()> {
    match cmd {
        StatusCommand::List { output } => {
            let statuses = list(ctx)?;
            print_output(output.output, &statuses, |statuses| {
                statuses
                    .iter()
                    .map(|s| format_status_line(s) + "\n")
                    .collect()
            })
        }
        StatusCommand::New {
            name,
            color,
            order,
            default,
            completed,
            cancelled,
            output,
        } => {
            let req = NewStatus {
                name,
                color,
                order_index: order,
                is_default: default,
                is_completed: completed,
                is_cancelled: cancelled,
            };
            let status = create(ctx, &req)?;
            print_output(output.output, &StatusJson::new(&status, Vec::new()), |s| {
                format!(
                    "Created status {}\n  hint: allow transitions with 'plank status allow <from> {}'\n",
                    s.name, s.name
                )
            })
        }
        StatusCommand::Allow { from, to } => {
            set_rule(ctx, &from, &to, true)?;
            println!("Allowed {} -> {}", from, to);
            Ok(())
        }
        StatusCommand::Deny { from, to } => {
            set_rule(ctx, &from, &to, false)?;
            println!("Denied {} -> {}", from, to);
            Ok(())
        }
        StatusCommand::Delete { name } => {
            let status = delete(ctx, &name)?;
            println!("Deleted status {}", status.name);
            Ok(())
        }
        StatusCommand::Seed => {
            let statuses = seed(ctx)?;
            let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();
            println!("Statuses: {}", names.join(", "));
            Ok(())
        }
    }
}

/// Every status in workflow order with the names it may move to.
pub fn list(ctx: &Context) -> Result<Vec<StatusJson>> {
    let registry = ctx.registry()?;
    Ok(registry
        .ordered()
        .iter()
        .map(|status| {
            let targets = registry
                .valid_targets(status.id)
                .into_iter()
                .map(|t| t.name.clone())
                .collect();
            StatusJson::new(status, targets)
        })
        .collect())
}

pub fn create(ctx: &Context, req: &NewStatus) -> Result<Status> {
    Ok(ctx.engine().create_status(Access::Allowed, req)?)
}

pub fn set_rule(ctx: &Context, from: &str, to: &str, allowed: bool) -> Result<StatusTransition> {
    let registry = ctx.registry()?;
    let from = resolve_status(&registry, from)?.id;
    let to = resolve_status(&registry, to)?.id;
    Ok(ctx
        .engine()
        .set_transition(Access::Allowed, from, to, allowed)?)
}

pub fn delete(ctx: &Context, name: &str) -> Result<Status> {
    let registry = ctx.registry()?;
    let status = resolve_status(&registry, name)?.clone();
    ctx.engine().delete_status(Access::Allowed, status.id)?;
    Ok(status)
}

pub fn seed(ctx: &Context) -> Result<Vec<Status>> {
    Ok(ctx.engine().seed_statuses(Access::Allowed)?)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
