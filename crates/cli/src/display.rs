// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pk_core::{BoardView, Card, ColumnView, Project, UserDirectory};

use crate::colors;
use crate::schema::{EpicJson, StatusJson, WorkItemJson};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wrap text at word boundaries if it's a single line.
///
/// Multi-line content is returned as-is to preserve user formatting.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for word in content.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines.join("\n")
}

fn push_description(output: &mut Vec<String>, description: Option<&str>) {
    if let Some(text) = description {
        output.push(String::new());
        output.push("Description:".to_string());
        output.extend(wrap_text(text, WRAP_WIDTH).lines().map(|l| format!("    {l}")));
    }
}

fn user(directory: &dyn UserDirectory, user_ref: &str) -> String {
    match directory.display_name(user_ref) {
        Some(name) if name != user_ref => format!("{name} ({user_ref})"),
        _ => user_ref.to_string(),
    }
}

/// One line per project for `project list`.
pub fn format_project_line(project: &Project) -> String {
    let mut line = format!("{}: {}", project.key, project.name);
    if let Some(owner) = &project.owner {
        line.push_str(&format!(" (@{owner})"));
    }
    if project.is_archived {
        line.push_str(" [archived]");
    }
    line
}

/// One line per status for `status list`.
pub fn format_status_line(status: &StatusJson) -> String {
    let mut flags = Vec::new();
    if status.is_default {
        flags.push("default");
    }
    if status.is_completed {
        flags.push("completed");
    }
    if status.is_cancelled {
        flags.push("cancelled");
    }
    if !status.is_active {
        flags.push("inactive");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };
    let targets = if status.allowed_targets.is_empty() {
        "(none)".to_string()
    } else {
        status.allowed_targets.join(", ")
    };
    format!(
        "{}. {} {}{flags} -> {targets}",
        status.order_index, status.name, status.color
    )
}

/// One line per work item, used after create, edit and move.
pub fn format_item_line(item: &WorkItemJson) -> String {
    let status = match &item.assignee {
        Some(assignee) => format!("{}, @{}", item.status, assignee),
        None => item.status.clone(),
    };
    format!(
        "- [{}] ({}) {}: {}",
        item.item_type, status, item.key, item.summary
    )
}

/// Details for `item show`.
pub fn format_item_details(item: &WorkItemJson, directory: &dyn UserDirectory) -> String {
    let mut output = vec![format!("[{}] {}", item.item_type, item.key)];
    output.push(format!("Summary: {}", item.summary));
    output.push(format!("Status: {}", item.status));
    output.push(format!("Priority: {}", item.priority));
    if let Some(assignee) = &item.assignee {
        output.push(format!("Assignee: {}", user(directory, assignee)));
    }
    if let Some(epic) = &item.epic {
        output.push(format!("Epic: {epic}"));
    }
    if let Some(parent) = &item.parent {
        output.push(format!("Parent: {parent}"));
    }
    output.push(format!(
        "Created: {}",
        item.created_at.format(TIMESTAMP_FORMAT)
    ));
    output.push(format!(
        "Updated: {} (version {})",
        item.updated_at.format(TIMESTAMP_FORMAT),
        item.version
    ));
    if item.is_archived {
        output.push("Archived: yes".to_string());
    }
    if !item.children.is_empty() {
        output.push(String::new());
        output.push("Children:".to_string());
        output.extend(item.children.iter().map(|key| format!("  - {key}")));
    }
    push_description(&mut output, item.description.as_deref());

    output.join("\n") + "\n"
}

/// Details for `epic show`.
pub fn format_epic_details(epic: &EpicJson, directory: &dyn UserDirectory) -> String {
    let mut output = vec![format!("[epic] {}", epic.key)];
    output.push(format!("Summary: {}", epic.summary));
    output.push(format!("Status: {}", epic.status));
    output.push(format!("Priority: {}", epic.priority));
    if let Some(assignee) = &epic.assignee {
        output.push(format!("Assignee: {}", user(directory, assignee)));
    }
    match (epic.start_date, epic.due_date) {
        (Some(start), Some(due)) => output.push(format!("Dates: {start} to {due}")),
        (Some(start), None) => output.push(format!("Start: {start}")),
        (None, Some(due)) => output.push(format!("Due: {due}")),
        (None, None) => {}
    }
    output.push(format!(
        "Progress: {}/{} done ({}%)",
        epic.progress.completed_work_item_count,
        epic.progress.work_item_count,
        epic.progress.percent_complete
    ));
    if epic.is_archived {
        output.push("Archived: yes".to_string());
    }
    push_description(&mut output, epic.description.as_deref());

    output.join("\n") + "\n"
}

fn format_column_header(column: &ColumnView, colorize: bool) -> String {
    let name = if colorize {
        colors::hex(&column.status_name, &column.color)
    } else {
        column.status_name.clone()
    };
    let count = match column.wip_limit {
        Some(limit) => format!("{}/{}", column.item_count(), limit),
        None => column.item_count().to_string(),
    };
    let mut header = format!("{name} ({count})");
    if column.over_wip_limit {
        header.push_str(" over WIP limit");
    }
    header
}

fn format_card(card: &Card) -> String {
    let mut line = format!(
        "  {} [{}] P{} {}",
        card.key, card.item_type, card.priority, card.summary
    );
    if let Some(assignee) = &card.assignee {
        line.push_str(&format!(" @{assignee}"));
    }
    line
}

/// Renders a board column by column; collapsed columns show only a header.
pub fn format_board(view: &BoardView, colorize: bool) -> String {
    let mut output = vec![format!(
        "{} / {} ({} items)",
        view.project_key, view.board_name, view.total_items
    )];
    for column in &view.columns {
        output.push(String::new());
        let header = format_column_header(column, colorize);
        if column.is_collapsed {
            output.push(format!("{header} [collapsed]"));
            continue;
        }
        output.push(header);
        output.extend(column.items.iter().map(format_card));
    }
    output.join("\n") + "\n"
}

/// One line per column for `board columns`.
pub fn format_columns(view: &BoardView) -> String {
    view.columns
        .iter()
        .map(|c| {
            let wip = c
                .wip_limit
                .map_or_else(|| "-".to_string(), |limit| limit.to_string());
            let collapsed = if c.is_collapsed { " [collapsed]" } else { "" };
            format!(
                "{}. {} (wip: {wip}, items: {}){collapsed}",
                c.order_index,
                c.status_name,
                c.item_count()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
