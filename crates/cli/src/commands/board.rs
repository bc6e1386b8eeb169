// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pk_core::{Access, Board, BoardView, NewBoard, ReorderColumnsRequest};

use super::{print_output, resolve_status, Context};
use crate::cli::{BoardCommand, WipAssignment};
use crate::colors;
use crate::commands::item;
use crate::display::{format_board, format_columns};
use crate::error::Result;

/// Column changes requested by `board columns`.
#[derive(Debug, Clone, Default)]
pub struct ColumnChanges {
    /// Status names in the new column order; empty keeps the order.
    pub order: Vec<String>,
    pub wip: Vec<WipAssignment>,
    pub collapse: Vec<String>,
    pub expand: Vec<String>,
}

impl ColumnChanges {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
            && self.wip.is_empty()
            && self.collapse.is_empty()
            && self.expand.is_empty()
    }
}

pub fn run(ctx: &Context, cmd: BoardCommand) -> Result<()> {
    match cmd {
        BoardCommand::New {
            name,
            default,
            output,
        } => {
            let board = create(ctx, &name, default)?;
            print_output(output.output, &board, |b| {
                format!("Created board {} (#{})\n", b.name, b.id)
            })
        }
        BoardCommand::Show { board, output } => {
            let view = show(ctx, board.as_deref())?;
            let colorize = colors::should_colorize();
            print_output(output.output, &view, |v| format_board(v, colorize))
        }
        BoardCommand::Columns {
            board,
            order,
            wip,
            collapse,
            expand,
            output,
        } => {
            let changes = ColumnChanges {
                order,
                wip,
                collapse,
                expand,
            };
            let view = configure_columns(ctx, board.as_deref(), &changes)?;
            print_output(output.output, &view.columns, |_| format_columns(&view))
        }
        BoardCommand::Rank { key, position } => {
            let indexes = rank(ctx, &key, position)?;
            println!(
                "Ranked {} at position {} of {}",
                key.trim().to_uppercase(),
                position.min(indexes.len().saturating_sub(1)),
                indexes.len()
            );
            Ok(())
        }
    }
}

pub fn create(ctx: &Context, name: &str, is_default: bool) -> Result<Board> {
    let project = ctx.project()?;
    let req = NewBoard {
        project_id: project.id,
        name: name.to_string(),
        is_default,
    };
    Ok(ctx.engine().create_board(Access::Allowed, &req)?)
}

pub fn show(ctx: &Context, board: Option<&str>) -> Result<BoardView> {
    let project = ctx.project()?;
    let board = ctx.board(&project, board)?;
    Ok(ctx.engine().project_board(board.id)?)
}

/// Applies column changes and returns the resulting board.
///
/// Statuses are resolved before anything is written, so an unknown name
/// leaves the board untouched.
pub fn configure_columns(
    ctx: &Context,
    board: Option<&str>,
    changes: &ColumnChanges,
) -> Result<BoardView> {
    let project = ctx.project()?;
    let board = ctx.board(&project, board)?;
    if changes.is_empty() {
        return Ok(ctx.engine().project_board(board.id)?);
    }

    let registry = ctx.registry()?;
    let status_id = |name: &str| resolve_status(&registry, name).map(|s| s.id);
    let wip = changes
        .wip
        .iter()
        .map(|w| Ok((status_id(&w.status)?, w.limit)))
        .collect::<Result<Vec<_>>>()?;
    let collapse = changes
        .collapse
        .iter()
        .map(|n| status_id(n))
        .collect::<Result<Vec<_>>>()?;
    let expand = changes
        .expand
        .iter()
        .map(|n| status_id(n))
        .collect::<Result<Vec<_>>>()?;
    let order = changes
        .order
        .iter()
        .map(|n| status_id(n))
        .collect::<Result<Vec<_>>>()?;

    let engine = ctx.engine();
    if !order.is_empty() {
        let view = engine.project_board(board.id)?;
        let column_ids = order
            .iter()
            .map(|sid| view.column_for_status(*sid).map_or(-1, |c| c.column_id))
            .collect();
        engine.reorder_columns(
            Access::Allowed,
            &ReorderColumnsRequest {
                board_id: board.id,
                column_ids,
            },
        )?;
    }
    for (sid, limit) in wip {
        engine.set_column_wip_limit(Access::Allowed, board.id, sid, limit)?;
    }
    for sid in collapse {
        engine.set_column_collapsed(Access::Allowed, board.id, sid, true)?;
    }
    for sid in expand {
        engine.set_column_collapsed(Access::Allowed, board.id, sid, false)?;
    }
    Ok(engine.project_board(board.id)?)
}

/// Places a card at `position` within its column.
pub fn rank(ctx: &Context, key: &str, position: usize) -> Result<Vec<(i64, i64)>> {
    let item = item::find(ctx, key)?;
    Ok(ctx
        .engine()
        .reorder_card(Access::Allowed, item.id, position)?)
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
