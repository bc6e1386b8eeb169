// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pk_core::{
    Access, MoveWorkItem, NewWorkItem, PlanningStore, WorkItem, WorkItemPatch, WorkItemType,
};

use super::{print_output, resolve_status, Context};
use crate::cli::{ItemCommand, OutputFormat};
use crate::display::{format_item_details, format_item_line};
use crate::error::Result;
use crate::schema::{ItemRefs, WorkItemJson};

/// Optional fields of a new work item, with references given as keys and
/// names the way a user types them.
#[derive(Debug, Clone, Default)]
pub struct ItemOptions {
    pub item_type: Option<WorkItemType>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<String>,
    pub priority: Option<u8>,
    pub epic: Option<String>,
    pub parent: Option<String>,
}

/// Changes for `item edit`; `Some(None)` clears a field.
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<Option<String>>,
    pub item_type: Option<WorkItemType>,
    pub priority: Option<u8>,
    pub epic: Option<Option<String>>,
    pub parent: Option<Option<String>>,
    pub expected_version: Option<i64>,
}

pub fn run(ctx: &Context, cmd: ItemCommand) -> Result<()> {
    match cmd {
        ItemCommand::New {
            summary,
            item_type,
            description,
            assignee,
            status,
            priority,
            epic,
            parent,
            output,
        } => {
            let opts = ItemOptions {
                item_type,
                description,
                assignee,
                status,
                priority,
                epic,
                parent,
            };
            let item = create(ctx, &summary, opts)?;
            print_item(ctx, output.output, &item, |i| {
                format!("Created {}\n", format_item_line(i))
            })
        }
        ItemCommand::Edit {
            key,
            summary,
            description,
            assignee,
            unassign,
            item_type,
            priority,
            epic,
            no_epic,
            parent,
            no_parent,
            version,
            output,
        } => {
            let opts = EditOptions {
                summary,
                description,
                assignee: if unassign { Some(None) } else { assignee.map(Some) },
                item_type,
                priority,
                epic: if no_epic { Some(None) } else { epic.map(Some) },
                parent: if no_parent { Some(None) } else { parent.map(Some) },
                expected_version: version.expected_version,
            };
            let item = edit(ctx, &key, opts)?;
            print_item(ctx, output.output, &item, |i| {
                format!("Updated {}\n", format_item_line(i))
            })
        }
        ItemCommand::Move {
            key,
            status,
            order,
            version,
            output,
        } => {
            let item = move_to(ctx, &key, &status, order, version.expected_version)?;
            print_item(ctx, output.output, &item, |i| {
                format!("Moved {}\n", format_item_line(i))
            })
        }
        ItemCommand::Show { key, output } => {
            let item = find(ctx, &key)?;
            let directory = ctx.config.user_directory();
            print_item(ctx, output.output, &item, |i| {
                format_item_details(i, &directory)
            })
        }
        ItemCommand::Archive { key } => {
            let item = archive(ctx, &key)?;
            println!("Archived {}", item.key);
            Ok(())
        }
    }
}

pub fn find(ctx: &Context, key: &str) -> Result<WorkItem> {
    Ok(ctx.engine().work_item_by_key(&key.trim().to_uppercase())?)
}

fn epic_id(ctx: &Context, key: &str) -> Result<i64> {
    Ok(ctx.engine().epic_by_key(&key.trim().to_uppercase())?.id)
}

pub fn create(ctx: &Context, summary: &str, opts: ItemOptions) -> Result<WorkItem> {
    let project = ctx.project()?;
    let status_id = match opts.status.as_deref() {
        Some(name) => Some(resolve_status(&ctx.registry()?, name)?.id),
        None => None,
    };
    let req = NewWorkItem {
        project_id: project.id,
        epic_id: opts.epic.as_deref().map(|k| epic_id(ctx, k)).transpose()?,
        item_type: opts.item_type,
        summary: summary.to_string(),
        description: opts.description,
        assignee: opts.assignee,
        status_id,
        priority: opts.priority,
        parent_id: opts
            .parent
            .as_deref()
            .map(|k| find(ctx, k).map(|p| p.id))
            .transpose()?,
    };
    Ok(ctx.engine().create_work_item(Access::Allowed, &req)?)
}

pub fn edit(ctx: &Context, key: &str, opts: EditOptions) -> Result<WorkItem> {
    let item = find(ctx, key)?;
    let patch = WorkItemPatch {
        summary: opts.summary,
        description: opts.description.map(Some),
        assignee: opts.assignee,
        item_type: opts.item_type,
        priority: opts.priority,
        epic_id: match opts.epic {
            Some(Some(k)) => Some(Some(epic_id(ctx, &k)?)),
            Some(None) => Some(None),
            None => None,
        },
        parent_id: match opts.parent {
            Some(Some(k)) => Some(Some(find(ctx, &k)?.id)),
            Some(None) => Some(None),
            None => None,
        },
        expected_version: opts.expected_version,
    };
    Ok(ctx
        .engine()
        .update_work_item(Access::Allowed, item.id, &patch)?)
}

pub fn move_to(
    ctx: &Context,
    key: &str,
    status: &str,
    order_index: Option<i64>,
    expected_version: Option<i64>,
) -> Result<WorkItem> {
    let item = find(ctx, key)?;
    let to_status_id = resolve_status(&ctx.registry()?, status)?.id;
    let req = MoveWorkItem {
        to_status_id,
        order_index,
        expected_version,
    };
    Ok(ctx.engine().move_work_item(Access::Allowed, item.id, &req)?)
}

pub fn archive(ctx: &Context, key: &str) -> Result<WorkItem> {
    let item = find(ctx, key)?;
    Ok(ctx.engine().archive_work_item(Access::Allowed, item.id)?)
}

/// Resolves the keys and names an item refers to.
pub fn details(ctx: &Context, item: &WorkItem) -> Result<WorkItemJson> {
    let registry = ctx.registry()?;
    let project = ctx.db.get_project(item.project_id)?;
    let siblings = ctx.db.list_work_items(item.project_id)?;
    let mut children: Vec<&WorkItem> = siblings
        .iter()
        .filter(|i| i.parent_id == Some(item.id) && !i.is_archived)
        .collect();
    children.sort_by_key(|i| i.id);

    let refs = ItemRefs {
        project: project.key,
        status: registry
            .get(item.status_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("status #{}", item.status_id)),
        epic: item
            .epic_id
            .map(|id| ctx.db.get_epic(id).map(|e| e.key))
            .transpose()?,
        parent: siblings
            .iter()
            .find(|i| Some(i.id) == item.parent_id)
            .map(|p| p.key.clone()),
        children: children.into_iter().map(|c| c.key.clone()).collect(),
    };
    Ok(WorkItemJson::new(item, refs))
}

fn print_item(
    ctx: &Context,
    format: OutputFormat,
    item: &WorkItem,
    text: impl FnOnce(&WorkItemJson) -> String,
) -> Result<()> {
    print_output(format, &details(ctx, item)?, text)
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
