// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The planning rule engine.
//!
//! [`PlanningEngine`] validates and applies every mutation of projects,
//! epics, work items, statuses and boards. Each mutating operation takes a
//! precomputed [`Access`] decision and checks it before any validation or
//! storage access. All validation runs before the first write.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{
    self, Board, BoardColumn, BoardView, NewBoard, ReorderColumnsRequest,
};
use crate::clock::Clock;
use crate::epic::{Epic, EpicProgress, NewEpic};
use crate::error::{Error, Result};
use crate::hierarchy::{HierarchyValidator, ItemArena, DEFAULT_MAX_DEPTH};
use crate::keys::{KeyGenerator, KeyScope};
use crate::project::{NewProject, Project};
use crate::registry::{self, StatusRegistry, TransitionPolicy};
use crate::status::{NewStatus, Status, StatusTransition, DEFAULT_STATUS_COLOR};
use crate::store::PlanningStore;
use crate::validate::{
    optional_text, required_text, validate_color, validate_order_index, validate_priority,
    validate_project_key, validate_wip_limit, DEFAULT_PRIORITY, MAX_BOARD_NAME_LENGTH,
    MAX_DESCRIPTION_LENGTH, MAX_EPIC_SUMMARY_LENGTH, MAX_PROJECT_DESCRIPTION_LENGTH,
    MAX_PROJECT_NAME_LENGTH, MAX_STATUS_NAME_LENGTH, MAX_USER_REF_LENGTH,
    MAX_WORK_ITEM_SUMMARY_LENGTH,
};
use crate::work_item::{MoveWorkItem, NewWorkItem, WorkItem, WorkItemPatch, WorkItemType};

/// A permission decision made by the caller before invoking the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

impl Access {
    pub fn from_allowed(allowed: bool) -> Self {
        if allowed {
            Access::Allowed
        } else {
            Access::Denied
        }
    }

    fn check(self, action: &str) -> Result<()> {
        match self {
            Access::Allowed => Ok(()),
            Access::Denied => {
                debug!(%action, "access denied");
                Err(Error::Forbidden(action.to_string()))
            }
        }
    }
}

/// Tunables for the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How transitions without an explicit rule are decided.
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
    /// Maximum nesting depth of work items.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            transition_policy: TransitionPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Validates and applies planning operations against a store.
pub struct PlanningEngine<'a, S: PlanningStore + ?Sized, C: Clock> {
    store: &'a S,
    clock: C,
    config: EngineConfig,
}

impl<'a, S: PlanningStore + ?Sized, C: Clock> PlanningEngine<'a, S, C> {
    pub fn new(store: &'a S, clock: C, config: EngineConfig) -> Self {
        PlanningEngine {
            store,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Loads the status registry with the configured policy.
    pub fn registry(&self) -> Result<StatusRegistry> {
        StatusRegistry::load(self.store, self.config.transition_policy)
    }

    fn validator(&self) -> HierarchyValidator {
        HierarchyValidator::new(self.config.max_depth)
    }

    // Lookups

    pub fn project_by_key(&self, key: &str) -> Result<Project> {
        self.store
            .find_project_by_key(key)?
            .ok_or_else(|| Error::not_found("project", key))
    }

    pub fn epic_by_key(&self, key: &str) -> Result<Epic> {
        self.store
            .find_epic_by_key(key)?
            .ok_or_else(|| Error::not_found("epic", key))
    }

    pub fn work_item_by_key(&self, key: &str) -> Result<WorkItem> {
        self.store
            .find_work_item_by_key(key)?
            .ok_or_else(|| Error::not_found("work item", key))
    }

    /// Loads a project that may still receive new epics and work items.
    fn open_project(&self, id: i64) -> Result<Project> {
        let project = self.store.get_project(id)?;
        if project.is_archived || !project.is_active {
            debug!(project = %project.key, "project is not open");
            return Err(Error::InvalidInput(format!(
                "project {} is archived",
                project.key
            )));
        }
        Ok(project)
    }

    /// Resolves the status for a new epic or work item.
    fn initial_status(&self, registry: &StatusRegistry, requested: Option<i64>) -> Result<i64> {
        match requested {
            Some(id) => Ok(registry.require_active(id)?.id),
            None => Ok(registry.default_status()?.id),
        }
    }

    /// Checks that an epic can hold items of `project`.
    fn check_epic(&self, epic_id: i64, project: &Project) -> Result<()> {
        let epic = self.store.get_epic(epic_id)?;
        if epic.project_id != project.id {
            return Err(Error::InvalidInput(format!(
                "epic {} belongs to another project than {}",
                epic.key, project.key
            )));
        }
        if epic.is_archived {
            return Err(Error::InvalidInput(format!("epic {} is archived", epic.key)));
        }
        Ok(())
    }

    /// Runs the hierarchy checks for giving `candidate` the parent `parent_id`.
    fn check_parent(
        &self,
        candidate: Option<i64>,
        project_id: i64,
        parent_id: Option<i64>,
    ) -> Result<()> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };
        let items = self.store.list_work_items(project_id)?;
        let arena = ItemArena::from_items(&items);
        if let Err(e) = self
            .validator()
            .validate_parent(candidate, project_id, Some(parent_id), &arena)
        {
            debug!(error = %e, "hierarchy rejected");
            return Err(e);
        }
        if let Some(parent) = items.iter().find(|i| i.id == parent_id) {
            if parent.is_archived {
                return Err(Error::InvalidHierarchy(format!(
                    "parent {} is archived",
                    parent.key
                )));
            }
        }
        Ok(())
    }

    // Projects

    pub fn create_project(&self, access: Access, req: &NewProject) -> Result<Project> {
        access.check("create project")?;
        let key = req.key.trim().to_string();
        validate_project_key(&key)?;
        let name = required_text("Name", &req.name, MAX_PROJECT_NAME_LENGTH)?;
        let description = optional_text(
            "Description",
            req.description.as_deref(),
            MAX_PROJECT_DESCRIPTION_LENGTH,
        )?;
        let owner = optional_text("Owner", req.owner.as_deref(), MAX_USER_REF_LENGTH)?;

        if self.store.find_project_by_key(&key)?.is_some() {
            debug!(%key, "duplicate project key");
            return Err(Error::DuplicateKey {
                entity: "project",
                key,
            });
        }

        let mut project = Project::new(key, name, self.clock.now());
        project.description = description;
        project.owner = owner;
        project.id = self.store.insert_project(&project)?;
        info!(project = %project.key, "created project");
        Ok(project)
    }

    /// Archives a project; its epics and work items stay readable.
    pub fn archive_project(&self, access: Access, id: i64) -> Result<Project> {
        access.check("archive project")?;
        let mut project = self.store.get_project(id)?;
        if project.is_archived {
            return Ok(project);
        }
        project.is_archived = true;
        project.is_active = false;
        project.updated_at = self.clock.now();
        project.version = self.store.update_project(&project)?;
        info!(project = %project.key, "archived project");
        Ok(project)
    }

    // Epics

    pub fn create_epic(&self, access: Access, req: &NewEpic) -> Result<Epic> {
        access.check("create epic")?;
        let summary = required_text("Summary", &req.summary, MAX_EPIC_SUMMARY_LENGTH)?;
        let description = optional_text(
            "Description",
            req.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )?;
        let assignee = optional_text("Assignee", req.assignee.as_deref(), MAX_USER_REF_LENGTH)?;
        let priority = req.priority.unwrap_or(DEFAULT_PRIORITY);
        validate_priority(priority)?;
        if let (Some(start), Some(due)) = (req.start_date, req.due_date) {
            if start > due {
                return Err(Error::InvalidInput(format!(
                    "start date {start} is after due date {due}"
                )));
            }
        }

        let project = self.open_project(req.project_id)?;
        let registry = self.registry()?;
        let status_id = self.initial_status(&registry, req.status_id)?;

        let key = KeyGenerator::new(self.store).next_key(&project.key, KeyScope::Epic)?;
        let now = self.clock.now();
        let mut epic = Epic {
            id: 0,
            project_id: project.id,
            key,
            summary,
            description,
            assignee,
            status_id,
            priority,
            start_date: req.start_date,
            due_date: req.due_date,
            is_archived: false,
            created_at: now,
            updated_at: now,
            version: 1,
        };
        epic.id = self.store.insert_epic(&epic)?;
        info!(epic = %epic.key, "created epic");
        Ok(epic)
    }

    pub fn archive_epic(&self, access: Access, id: i64) -> Result<Epic> {
        access.check("archive epic")?;
        let mut epic = self.store.get_epic(id)?;
        if epic.is_archived {
            return Ok(epic);
        }
        epic.is_archived = true;
        epic.updated_at = self.clock.now();
        epic.version = self.store.update_epic(&epic)?;
        info!(epic = %epic.key, "archived epic");
        Ok(epic)
    }

    /// Counts the live work items of an epic and how many are completed.
    ///
    /// Computed on every call; nothing is stored.
    pub fn epic_progress(&self, epic_id: i64) -> Result<EpicProgress> {
        let epic = self.store.get_epic(epic_id)?;
        let registry = self.registry()?;
        let items = self.store.list_work_items_for_epic(epic.id)?;
        let live: Vec<&WorkItem> = items.iter().filter(|i| !i.is_archived).collect();
        let completed = live
            .iter()
            .filter(|i| registry.get(i.status_id).is_some_and(|s| s.is_completed))
            .count();
        Ok(EpicProgress {
            epic_id: epic.id,
            work_item_count: live.len(),
            completed_work_item_count: completed,
        })
    }

    // Work items

    pub fn create_work_item(&self, access: Access, req: &NewWorkItem) -> Result<WorkItem> {
        access.check("create work item")?;
        let summary = required_text("Summary", &req.summary, MAX_WORK_ITEM_SUMMARY_LENGTH)?;
        let description = optional_text(
            "Description",
            req.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )?;
        let assignee = optional_text("Assignee", req.assignee.as_deref(), MAX_USER_REF_LENGTH)?;
        let priority = req.priority.unwrap_or(DEFAULT_PRIORITY);
        validate_priority(priority)?;

        let project = self.open_project(req.project_id)?;
        if let Some(epic_id) = req.epic_id {
            self.check_epic(epic_id, &project)?;
        }
        self.check_parent(None, project.id, req.parent_id)?;
        let registry = self.registry()?;
        let status_id = self.initial_status(&registry, req.status_id)?;
        let item_type = req.item_type.unwrap_or(if req.parent_id.is_some() {
            WorkItemType::Subtask
        } else {
            WorkItemType::Task
        });

        let key = KeyGenerator::new(self.store).next_key(&project.key, KeyScope::WorkItem)?;
        let now = self.clock.now();
        let mut item = WorkItem {
            id: 0,
            project_id: project.id,
            epic_id: req.epic_id,
            key,
            item_type,
            summary,
            description,
            assignee,
            status_id,
            priority,
            parent_id: req.parent_id,
            order_index: None,
            is_archived: false,
            created_at: now,
            updated_at: now,
            version: 1,
        };
        item.id = self.store.insert_work_item(&item)?;
        info!(item = %item.key, kind = %item.item_type, "created work item");
        Ok(item)
    }

    fn load_for_write(&self, id: i64, expected_version: Option<i64>) -> Result<WorkItem> {
        let item = self.store.get_work_item(id)?;
        if let Some(expected) = expected_version {
            if expected != item.version {
                tracing::warn!(item = %item.key, expected, actual = item.version, "stale version");
                return Err(Error::Conflict(format!("work item {}", item.key)));
            }
        }
        Ok(item)
    }

    /// Applies a partial update, re-validating epic and parent changes.
    pub fn update_work_item(
        &self,
        access: Access,
        id: i64,
        patch: &WorkItemPatch,
    ) -> Result<WorkItem> {
        access.check("update work item")?;
        let summary = patch
            .summary
            .as_deref()
            .map(|s| required_text("Summary", s, MAX_WORK_ITEM_SUMMARY_LENGTH))
            .transpose()?;
        let description = patch
            .description
            .as_ref()
            .map(|d| optional_text("Description", d.as_deref(), MAX_DESCRIPTION_LENGTH))
            .transpose()?;
        let assignee = patch
            .assignee
            .as_ref()
            .map(|a| optional_text("Assignee", a.as_deref(), MAX_USER_REF_LENGTH))
            .transpose()?;
        if let Some(priority) = patch.priority {
            validate_priority(priority)?;
        }

        let mut item = self.load_for_write(id, patch.expected_version)?;
        if patch.is_empty() {
            return Ok(item);
        }
        if item.is_archived {
            return Err(Error::InvalidInput(format!(
                "work item {} is archived",
                item.key
            )));
        }

        if let Some(Some(epic_id)) = patch.epic_id {
            let project = self.store.get_project(item.project_id)?;
            self.check_epic(epic_id, &project)?;
        }
        if let Some(parent_id) = patch.parent_id {
            self.check_parent(Some(item.id), item.project_id, parent_id)?;
        }

        if let Some(summary) = summary {
            item.summary = summary;
        }
        if let Some(description) = description {
            item.description = description;
        }
        if let Some(assignee) = assignee {
            item.assignee = assignee;
        }
        if let Some(item_type) = patch.item_type {
            item.item_type = item_type;
        }
        if let Some(priority) = patch.priority {
            item.priority = priority;
        }
        if let Some(epic_id) = patch.epic_id {
            item.epic_id = epic_id;
        }
        if let Some(parent_id) = patch.parent_id {
            item.parent_id = parent_id;
        }
        item.updated_at = self.clock.now();
        item.version = self.store.update_work_item(&item)?;
        info!(item = %item.key, version = item.version, "updated work item");
        Ok(item)
    }

    /// Moves a work item to another status.
    ///
    /// A move to the current status succeeds without a status change. With an
    /// `order_index` the destination column is renumbered `0..n` around the
    /// item; a cross-column move also closes the gap it leaves behind. WIP
    /// limits are not checked here.
    pub fn move_work_item(&self, access: Access, id: i64, req: &MoveWorkItem) -> Result<WorkItem> {
        access.check("move work item")?;
        if let Some(index) = req.order_index {
            validate_order_index(index)?;
        }
        let mut item = self.load_for_write(id, req.expected_version)?;
        if item.is_archived {
            return Err(Error::InvalidInput(format!(
                "work item {} is archived",
                item.key
            )));
        }

        if req.to_status_id == item.status_id {
            let Some(index) = req.order_index else {
                debug!(item = %item.key, "move to current status is a no-op");
                return Ok(item);
            };
            let indexes = self.column_indexes(&item, item.status_id, Some(index))?;
            item = self.write_move(item, &indexes)?;
            info!(item = %item.key, index, "repositioned work item");
            return Ok(item);
        }

        let registry = self.registry()?;
        let target = registry.require_active(req.to_status_id)?;
        if !registry.is_transition_allowed(item.status_id, target.id) {
            let from = registry
                .get(item.status_id)
                .map_or_else(|| format!("status #{}", item.status_id), |s| s.name.clone());
            debug!(item = %item.key, %from, to = %target.name, "transition rejected");
            return Err(Error::InvalidTransition {
                from,
                to: target.name.clone(),
                valid_targets: registry.valid_targets_hint(item.status_id),
            });
        }

        let indexes = self.column_indexes(&item, target.id, req.order_index)?;
        item.status_id = target.id;
        item = self.write_move(item, &indexes)?;
        info!(item = %item.key, status = %target.name, "moved work item");
        Ok(item)
    }

    /// Order indexes after `item` lands in `status_id`: the destination
    /// column renumbered around it when a position is given, and the column
    /// it leaves closed up.
    fn column_indexes(
        &self,
        item: &WorkItem,
        status_id: i64,
        position: Option<i64>,
    ) -> Result<Vec<(i64, i64)>> {
        let items = self.store.list_work_items(item.project_id)?;
        let mut indexes = match position {
            Some(position) => {
                let ids: Vec<i64> = board::column_cards(&items, status_id, item.id)
                    .iter()
                    .map(|c| c.id)
                    .collect();
                let position = usize::try_from(position).unwrap_or(usize::MAX);
                board::reorder(&ids, item.id, position)
            }
            None => Vec::new(),
        };
        if status_id != item.status_id && item.order_index.is_some() {
            indexes.extend(board::close_gaps(&board::column_cards(
                &items,
                item.status_id,
                item.id,
            )));
        }
        Ok(indexes)
    }

    /// Writes the moved item with its own index taken from `indexes`, and
    /// every other entry, in one transaction.
    fn write_move(&self, mut item: WorkItem, indexes: &[(i64, i64)]) -> Result<WorkItem> {
        item.order_index = indexes
            .iter()
            .find(|(id, _)| *id == item.id)
            .map(|(_, index)| *index);
        let others: Vec<(i64, i64)> = indexes
            .iter()
            .copied()
            .filter(|(id, _)| *id != item.id)
            .collect();
        item.updated_at = self.clock.now();
        item.version = self.store.move_work_item(&item, &others)?;
        Ok(item)
    }

    pub fn archive_work_item(&self, access: Access, id: i64) -> Result<WorkItem> {
        access.check("archive work item")?;
        let mut item = self.store.get_work_item(id)?;
        if item.is_archived {
            return Ok(item);
        }
        item.is_archived = true;
        item.updated_at = self.clock.now();
        item.version = self.store.update_work_item(&item)?;
        info!(item = %item.key, "archived work item");
        Ok(item)
    }

    // Statuses

    pub fn create_status(&self, access: Access, req: &NewStatus) -> Result<Status> {
        access.check("create status")?;
        let name = required_text("Name", &req.name, MAX_STATUS_NAME_LENGTH)?;
        let color = match req.color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() => {
                validate_color(color)?;
                color.to_string()
            }
            _ => DEFAULT_STATUS_COLOR.to_string(),
        };
        if let Some(index) = req.order_index {
            validate_order_index(index)?;
        }
        if req.is_completed && req.is_cancelled {
            return Err(Error::InvalidInput(
                "a status cannot be both completed and cancelled".to_string(),
            ));
        }

        let existing = self.store.list_statuses()?;
        if existing.iter().any(|s| s.name.eq_ignore_ascii_case(&name)) {
            return Err(Error::DuplicateKey {
                entity: "status",
                key: name,
            });
        }
        let order_index = req.order_index.unwrap_or_else(|| {
            existing
                .iter()
                .map(|s| s.order_index)
                .max()
                .map_or(0, |max| max + 1)
        });

        let mut status = Status::new(name, order_index).with_color(color);
        status.is_default = req.is_default;
        status.is_completed = req.is_completed;
        status.is_cancelled = req.is_cancelled;
        status.id = self.store.insert_status(&status)?;
        info!(status = %status.name, "created status");
        Ok(status)
    }

    /// Records an explicit allow or deny rule between two statuses.
    pub fn set_transition(
        &self,
        access: Access,
        from: i64,
        to: i64,
        allowed: bool,
    ) -> Result<StatusTransition> {
        access.check("change status transitions")?;
        if from == to {
            return Err(Error::InvalidInput(
                "a status always transitions to itself".to_string(),
            ));
        }
        let from_status = self.store.get_status(from)?;
        let to_status = self.store.get_status(to)?;
        let transition = StatusTransition {
            from_status_id: from_status.id,
            to_status_id: to_status.id,
            is_allowed: allowed,
        };
        self.store.upsert_transition(&transition)?;
        info!(from = %from_status.name, to = %to_status.name, allowed, "set transition");
        Ok(transition)
    }

    /// Deletes an unreferenced status.
    pub fn delete_status(&self, access: Access, id: i64) -> Result<()> {
        access.check("delete status")?;
        let status = self.store.get_status(id)?;
        let references = self.store.count_status_references(id)?;
        if !references.is_empty() {
            debug!(status = %status.name, "status still referenced");
            return Err(Error::StatusInUse {
                name: status.name,
                references: references.describe(),
            });
        }
        self.store.delete_status(id)?;
        info!(status = %status.name, "deleted status");
        Ok(())
    }

    /// Creates the default workflow if no status exists yet.
    pub fn seed_statuses(&self, access: Access) -> Result<Vec<Status>> {
        access.check("seed statuses")?;
        registry::seed_defaults(self.store)
    }

    // Boards

    /// Creates a board with one column per active status, in workflow order.
    pub fn create_board(&self, access: Access, req: &NewBoard) -> Result<Board> {
        access.check("create board")?;
        let name = required_text("Name", &req.name, MAX_BOARD_NAME_LENGTH)?;
        let project = self.open_project(req.project_id)?;
        let registry = self.registry()?;

        let mut board = Board {
            id: 0,
            project_id: project.id,
            name,
            is_default: req.is_default,
            created_at: self.clock.now(),
        };
        let columns: Vec<BoardColumn> = registry
            .active()
            .zip(0_i64..)
            .map(|(status, order_index)| BoardColumn {
                id: 0,
                board_id: 0,
                status_id: status.id,
                order_index,
                wip_limit: None,
                is_collapsed: false,
            })
            .collect();
        board.id = self.store.insert_board(&board, &columns)?;
        info!(board = %board.name, project = %project.key, columns = columns.len(), "created board");
        Ok(board)
    }

    /// Derives the current view of a board.
    pub fn project_board(&self, board_id: i64) -> Result<BoardView> {
        let board = self.store.get_board(board_id)?;
        let project = self.store.get_project(board.project_id)?;
        let columns = self.store.list_columns(board.id)?;
        let statuses = self.store.list_statuses()?;
        let items = self.store.list_work_items(project.id)?;
        Ok(board::project_board(
            &project, &board, &columns, &statuses, &items,
        ))
    }

    fn column_for_status(&self, board_id: i64, status_id: i64) -> Result<BoardColumn> {
        let board = self.store.get_board(board_id)?;
        self.store
            .list_columns(board.id)?
            .into_iter()
            .find(|c| c.status_id == status_id)
            .ok_or_else(|| {
                Error::not_found("board column", format!("status #{status_id} on {}", board.name))
            })
    }

    /// Sets or clears the advisory WIP limit of a board column.
    pub fn set_column_wip_limit(
        &self,
        access: Access,
        board_id: i64,
        status_id: i64,
        wip_limit: Option<u32>,
    ) -> Result<BoardColumn> {
        access.check("configure board")?;
        validate_wip_limit(wip_limit)?;
        let mut column = self.column_for_status(board_id, status_id)?;
        column.wip_limit = wip_limit;
        self.store.update_columns(std::slice::from_ref(&column))?;
        info!(board_id, status_id, ?wip_limit, "set wip limit");
        Ok(column)
    }

    pub fn set_column_collapsed(
        &self,
        access: Access,
        board_id: i64,
        status_id: i64,
        collapsed: bool,
    ) -> Result<BoardColumn> {
        access.check("configure board")?;
        let mut column = self.column_for_status(board_id, status_id)?;
        column.is_collapsed = collapsed;
        self.store.update_columns(std::slice::from_ref(&column))?;
        Ok(column)
    }

    pub fn reorder_columns(
        &self,
        access: Access,
        req: &ReorderColumnsRequest,
    ) -> Result<Vec<BoardColumn>> {
        access.check("configure board")?;
        let board = self.store.get_board(req.board_id)?;
        let columns = self.store.list_columns(board.id)?;
        let reordered = board::reorder_columns(&columns, req)?;
        self.store.update_columns(&reordered)?;
        info!(board = %board.name, "reordered columns");
        Ok(reordered)
    }

    /// Places a card at `position` within its column and rewrites the
    /// column's order indexes as `0..n`.
    pub fn reorder_card(
        &self,
        access: Access,
        item_id: i64,
        position: usize,
    ) -> Result<Vec<(i64, i64)>> {
        access.check("rank work item")?;
        let item = self.store.get_work_item(item_id)?;
        if item.is_archived {
            return Err(Error::InvalidInput(format!(
                "work item {} is archived",
                item.key
            )));
        }
        let mut column: Vec<WorkItem> = self
            .store
            .list_work_items(item.project_id)?
            .into_iter()
            .filter(|i| i.status_id == item.status_id && !i.is_archived)
            .collect();
        column.sort_by(board::card_order);
        let ids: Vec<i64> = column.iter().map(|i| i.id).collect();

        let indexes = board::reorder(&ids, item.id, position);
        self.store.update_order_indexes(&indexes, self.clock.now())?;
        info!(item = %item.key, position, "ranked work item");
        Ok(indexes)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
