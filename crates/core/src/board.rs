// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Kanban boards and their projection from work item state.
//!
//! A board maps statuses to ordered columns. [`project_board`] groups the
//! project's live work items into those columns; the view is derived on
//! every call and never stored. WIP limits are reported, not enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::project::Project;
use crate::status::Status;
use crate::work_item::{WorkItem, WorkItemType};

/// A kanban board belonging to one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Database-assigned identifier.
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// One column of a board, showing the items of a single status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Database-assigned identifier.
    pub id: i64,
    pub board_id: i64,
    pub status_id: i64,
    pub order_index: i64,
    /// Advisory cap on the number of cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,
    pub is_collapsed: bool,
}

/// Request to create a board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NewBoard {
    pub project_id: i64,
    /// Board name, 1 to 100 characters.
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Request to put a board's columns in a new order.
///
/// `column_ids` must name every column of the board exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ReorderColumnsRequest {
    pub board_id: i64,
    pub column_ids: Vec<i64>,
}

/// A work item as shown on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Card {
    pub work_item_id: i64,
    pub key: String,
    pub summary: String,
    pub item_type: WorkItemType,
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

impl From<&WorkItem> for Card {
    fn from(item: &WorkItem) -> Self {
        Card {
            work_item_id: item.id,
            key: item.key.clone(),
            summary: item.summary.clone(),
            item_type: item.item_type,
            priority: item.priority,
            assignee: item.assignee.clone(),
            parent_id: item.parent_id,
            order_index: item.order_index,
        }
    }
}

/// A projected column with its cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ColumnView {
    pub column_id: i64,
    pub status_id: i64,
    pub status_name: String,
    pub color: String,
    pub order_index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,
    pub is_collapsed: bool,
    /// True when the column holds more cards than its WIP limit.
    pub over_wip_limit: bool,
    pub items: Vec<Card>,
}

impl ColumnView {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if one more card fits under the WIP limit.
    ///
    /// Callers that want hard limits check this before moving an item in.
    pub fn has_capacity(&self) -> bool {
        self.wip_limit
            .is_none_or(|limit| self.items.len() < limit as usize)
    }
}

/// A projected board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct BoardView {
    pub board_id: i64,
    pub board_name: String,
    pub project_id: i64,
    pub project_key: String,
    pub columns: Vec<ColumnView>,
    pub total_items: usize,
}

impl BoardView {
    pub fn column_for_status(&self, status_id: i64) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.status_id == status_id)
    }
}

/// Card ordering: order index ascending with unset last, then id ascending.
pub fn card_order(a: &WorkItem, b: &WorkItem) -> Ordering {
    match (a.order_index, b.order_index) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id.cmp(&b.id))
}

/// Builds the board view from current state.
///
/// Items of other projects and archived items are ignored. Items whose
/// status has no column are not shown.
pub fn project_board(
    project: &Project,
    board: &Board,
    columns: &[BoardColumn],
    statuses: &[Status],
    items: &[WorkItem],
) -> BoardView {
    let mut by_status: HashMap<i64, Vec<&WorkItem>> = HashMap::new();
    for item in items
        .iter()
        .filter(|i| i.project_id == project.id && !i.is_archived)
    {
        by_status.entry(item.status_id).or_default().push(item);
    }

    let mut ordered_columns: Vec<&BoardColumn> = columns
        .iter()
        .filter(|c| c.board_id == board.id)
        .collect();
    ordered_columns.sort_by_key(|c| (c.order_index, c.id));

    let views: Vec<ColumnView> = ordered_columns
        .into_iter()
        .map(|column| {
            let mut cards = by_status.remove(&column.status_id).unwrap_or_default();
            cards.sort_by(|a, b| card_order(a, b));
            let status = statuses.iter().find(|s| s.id == column.status_id);
            let items: Vec<Card> = cards.into_iter().map(Card::from).collect();
            ColumnView {
                column_id: column.id,
                status_id: column.status_id,
                status_name: status
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| format!("status #{}", column.status_id)),
                color: status
                    .map(|s| s.color.clone())
                    .unwrap_or_else(|| crate::status::DEFAULT_STATUS_COLOR.to_string()),
                order_index: column.order_index,
                wip_limit: column.wip_limit,
                is_collapsed: column.is_collapsed,
                over_wip_limit: column
                    .wip_limit
                    .is_some_and(|limit| items.len() > limit as usize),
                items,
            }
        })
        .collect();

    let total_items = views.iter().map(ColumnView::item_count).sum();
    BoardView {
        board_id: board.id,
        board_name: board.name.clone(),
        project_id: project.id,
        project_key: project.key.clone(),
        columns: views,
        total_items,
    }
}

/// Places `moved` at `position` among `ordered_ids` and returns the new
/// contiguous 0-based order indexes for every id in the column.
///
/// `moved` may come from another column; positions past the end append.
pub fn reorder(ordered_ids: &[i64], moved: i64, position: usize) -> Vec<(i64, i64)> {
    let mut ids: Vec<i64> = ordered_ids.iter().copied().filter(|&id| id != moved).collect();
    let position = position.min(ids.len());
    ids.insert(position, moved);
    ids.into_iter()
        .zip(0_i64..)
        .collect()
}

/// Live cards of one status in display order, leaving out `except`.
pub fn column_cards(items: &[WorkItem], status_id: i64, except: i64) -> Vec<&WorkItem> {
    let mut cards: Vec<&WorkItem> = items
        .iter()
        .filter(|i| i.status_id == status_id && !i.is_archived && i.id != except)
        .collect();
    cards.sort_by(|a, b| card_order(a, b));
    cards
}

/// Renumbers the indexed cards of a column as `0..n`, keeping their order.
///
/// Unindexed cards stay unindexed; they already sort after the rest.
pub fn close_gaps(cards: &[&WorkItem]) -> Vec<(i64, i64)> {
    cards
        .iter()
        .filter(|c| c.order_index.is_some())
        .map(|c| c.id)
        .zip(0_i64..)
        .collect()
}

/// Order index that appends after every indexed card (0 for an empty column).
pub fn next_order_index(indexes: impl IntoIterator<Item = Option<i64>>) -> i64 {
    indexes
        .into_iter()
        .flatten()
        .max()
        .map_or(0, |max| max + 1)
}

/// Applies a [`ReorderColumnsRequest`], returning the columns in their new
/// order with contiguous 0-based order indexes.
pub fn reorder_columns(
    columns: &[BoardColumn],
    request: &ReorderColumnsRequest,
) -> Result<Vec<BoardColumn>> {
    let existing: HashSet<i64> = columns
        .iter()
        .filter(|c| c.board_id == request.board_id)
        .map(|c| c.id)
        .collect();
    let requested: HashSet<i64> = request.column_ids.iter().copied().collect();

    if requested.len() != request.column_ids.len() {
        return Err(Error::InvalidInput(
            "column order lists a column more than once".to_string(),
        ));
    }
    if requested != existing {
        return Err(Error::InvalidInput(format!(
            "column order must list exactly the {} columns of board #{}",
            existing.len(),
            request.board_id
        )));
    }

    let reordered = request
        .column_ids
        .iter()
        .zip(0_i64..)
        .filter_map(|(id, index)| {
            columns.iter().find(|c| c.id == *id).map(|c| BoardColumn {
                order_index: index,
                ..c.clone()
            })
        })
        .collect();
    Ok(reordered)
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
