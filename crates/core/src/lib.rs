// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pk-core: planning rule engine for plank
//!
//! This crate provides the data model, the rule engine that validates every
//! mutation of projects, epics, work items, statuses and boards, and the
//! SQLite store behind it.

pub mod board;
pub mod clock;
pub mod db;
pub mod engine;
pub mod epic;
pub mod error;
pub mod hierarchy;
pub mod identity;
pub mod keys;
pub mod project;
pub mod registry;
pub mod status;
pub mod store;
pub mod validate;
pub mod work_item;

pub use board::{Board, BoardColumn, BoardView, Card, ColumnView, NewBoard, ReorderColumnsRequest};
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use engine::{Access, EngineConfig, PlanningEngine};
pub use epic::{Epic, EpicProgress, NewEpic};
pub use error::{Error, ErrorKind, Result};
pub use hierarchy::{HierarchyValidator, ItemArena};
pub use identity::{StaticDirectory, UserDirectory};
pub use keys::{KeyCounterStore, KeyGenerator, KeyScope};
pub use project::{NewProject, Project};
pub use registry::{StatusRegistry, TransitionPolicy};
pub use status::{NewStatus, Status, StatusReferences, StatusTransition};
pub use store::PlanningStore;
pub use work_item::{MoveWorkItem, NewWorkItem, WorkItem, WorkItemPatch, WorkItemType};
