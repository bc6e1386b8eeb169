// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence interface consumed by the planning engine.
//!
//! Updates use optimistic concurrency: an update carries the version it was
//! read at and fails with [`Error::Conflict`](crate::Error::Conflict) when
//! the stored row moved on in the meantime. Stores never retry.

use chrono::{DateTime, Utc};

use crate::board::{Board, BoardColumn};
use crate::epic::Epic;
use crate::error::Result;
use crate::keys::KeyCounterStore;
use crate::project::Project;
use crate::status::{Status, StatusReferences, StatusTransition};
use crate::work_item::WorkItem;

/// Storage for projects, epics, work items, statuses and boards.
pub trait PlanningStore: KeyCounterStore {
    // Projects

    /// Inserts a project and returns its id. Fails with `DuplicateKey` if
    /// the key is taken.
    fn insert_project(&self, project: &Project) -> Result<i64>;
    fn get_project(&self, id: i64) -> Result<Project>;
    fn find_project_by_key(&self, key: &str) -> Result<Option<Project>>;
    fn list_projects(&self) -> Result<Vec<Project>>;
    /// Writes all mutable fields and returns the new version.
    fn update_project(&self, project: &Project) -> Result<i64>;

    // Epics

    fn insert_epic(&self, epic: &Epic) -> Result<i64>;
    fn get_epic(&self, id: i64) -> Result<Epic>;
    fn find_epic_by_key(&self, key: &str) -> Result<Option<Epic>>;
    fn list_epics(&self, project_id: i64) -> Result<Vec<Epic>>;
    fn update_epic(&self, epic: &Epic) -> Result<i64>;

    // Work items

    fn insert_work_item(&self, item: &WorkItem) -> Result<i64>;
    fn get_work_item(&self, id: i64) -> Result<WorkItem>;
    fn find_work_item_by_key(&self, key: &str) -> Result<Option<WorkItem>>;
    /// All work items of a project, archived ones included.
    fn list_work_items(&self, project_id: i64) -> Result<Vec<WorkItem>>;
    fn list_work_items_for_epic(&self, epic_id: i64) -> Result<Vec<WorkItem>>;
    fn update_work_item(&self, item: &WorkItem) -> Result<i64>;
    /// Rewrites order indexes of several items in one transaction.
    fn update_order_indexes(&self, indexes: &[(i64, i64)], updated_at: DateTime<Utc>)
        -> Result<()>;
    /// Writes a moved item (versioned) together with the rewritten order
    /// indexes of the columns it left and entered. Returns the new version.
    fn move_work_item(&self, item: &WorkItem, indexes: &[(i64, i64)]) -> Result<i64>;

    // Statuses

    /// Inserts a status. A default status clears the flag on every other
    /// status in the same transaction.
    fn insert_status(&self, status: &Status) -> Result<i64>;
    fn get_status(&self, id: i64) -> Result<Status>;
    /// All statuses ordered by order index, then id.
    fn list_statuses(&self) -> Result<Vec<Status>>;
    fn update_status(&self, status: &Status) -> Result<()>;
    /// Deletes a status and every transition that mentions it.
    fn delete_status(&self, id: i64) -> Result<()>;
    fn count_status_references(&self, id: i64) -> Result<StatusReferences>;
    fn list_transitions(&self) -> Result<Vec<StatusTransition>>;
    fn upsert_transition(&self, transition: &StatusTransition) -> Result<()>;
    /// Inserts `statuses` and the transitions between them (given as index
    /// pairs into `statuses`) in one transaction, only if no status exists
    /// yet. Returns whether anything was inserted.
    fn seed_statuses(&self, statuses: &[Status], transitions: &[(usize, usize)]) -> Result<bool>;

    // Boards

    /// Inserts a board with its columns; column `board_id`s are ignored.
    fn insert_board(&self, board: &Board, columns: &[BoardColumn]) -> Result<i64>;
    fn get_board(&self, id: i64) -> Result<Board>;
    fn list_boards(&self, project_id: i64) -> Result<Vec<Board>>;
    /// Columns of a board ordered by order index, then id.
    fn list_columns(&self, board_id: i64) -> Result<Vec<BoardColumn>>;
    /// Writes order index, WIP limit and collapsed flag of each column.
    fn update_columns(&self, columns: &[BoardColumn]) -> Result<()>;
}
