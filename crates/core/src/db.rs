// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed planning store.
//!
//! [`Database`] implements [`PlanningStore`] and [`KeyCounterStore`] on a
//! single connection. Open one connection per thread; SQLite serializes
//! writers through WAL mode and the busy timeout.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{
    params, Connection, ErrorCode, OptionalExtension, Row, Transaction, TransactionBehavior,
};
use std::path::Path;

use crate::board::{Board, BoardColumn};
use crate::epic::Epic;
use crate::error::{Error, Result};
use crate::keys::{KeyCounterStore, KeyScope};
use crate::project::Project;
use crate::status::{Status, StatusReferences, StatusTransition};
use crate::store::PlanningStore;
use crate::work_item::WorkItem;

/// SQL schema for the planning database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    key TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT,
    owner TEXT,
    is_active INTEGER NOT NULL DEFAULT 1,
    is_archived INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    version INTEGER NOT NULL DEFAULT 1
);

-- Installation-wide workflow statuses
CREATE TABLE IF NOT EXISTS statuses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE COLLATE NOCASE,
    color TEXT NOT NULL,
    order_index INTEGER NOT NULL,
    is_default INTEGER NOT NULL DEFAULT 0,
    is_completed INTEGER NOT NULL DEFAULT 0,
    is_cancelled INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1
);

-- Transition allow-list; a missing pair is decided by the registry policy
CREATE TABLE IF NOT EXISTS status_transitions (
    from_status_id INTEGER NOT NULL,
    to_status_id INTEGER NOT NULL,
    is_allowed INTEGER NOT NULL DEFAULT 1,
    PRIMARY KEY (from_status_id, to_status_id),
    FOREIGN KEY (from_status_id) REFERENCES statuses(id),
    FOREIGN KEY (to_status_id) REFERENCES statuses(id),
    CHECK (from_status_id != to_status_id)
);

CREATE TABLE IF NOT EXISTS epics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL,
    key TEXT NOT NULL,
    summary TEXT NOT NULL,
    description TEXT,
    assignee TEXT,
    status_id INTEGER NOT NULL,
    priority INTEGER NOT NULL DEFAULT 3,
    start_date TEXT,
    due_date TEXT,
    is_archived INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    version INTEGER NOT NULL DEFAULT 1,
    UNIQUE (project_id, key),
    FOREIGN KEY (project_id) REFERENCES projects(id),
    FOREIGN KEY (status_id) REFERENCES statuses(id)
);

CREATE TABLE IF NOT EXISTS work_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL,
    epic_id INTEGER,
    key TEXT NOT NULL,
    type TEXT NOT NULL,
    summary TEXT NOT NULL,
    description TEXT,
    assignee TEXT,
    status_id INTEGER NOT NULL,
    priority INTEGER NOT NULL DEFAULT 3,
    parent_id INTEGER,
    order_index INTEGER,
    is_archived INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    version INTEGER NOT NULL DEFAULT 1,
    UNIQUE (project_id, key),
    FOREIGN KEY (project_id) REFERENCES projects(id),
    FOREIGN KEY (epic_id) REFERENCES epics(id),
    FOREIGN KEY (status_id) REFERENCES statuses(id),
    FOREIGN KEY (parent_id) REFERENCES work_items(id),
    CHECK (parent_id IS NULL OR parent_id != id)
);

-- Last issued number per (project key, scope); never decremented
CREATE TABLE IF NOT EXISTS key_counters (
    project_key TEXT NOT NULL,
    scope TEXT NOT NULL,
    last_value INTEGER NOT NULL,
    PRIMARY KEY (project_key, scope)
);

CREATE TABLE IF NOT EXISTS boards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    is_default INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    FOREIGN KEY (project_id) REFERENCES projects(id)
);

CREATE TABLE IF NOT EXISTS board_columns (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    board_id INTEGER NOT NULL,
    status_id INTEGER NOT NULL,
    order_index INTEGER NOT NULL,
    wip_limit INTEGER,
    is_collapsed INTEGER NOT NULL DEFAULT 0,
    UNIQUE (board_id, status_id),
    FOREIGN KEY (board_id) REFERENCES boards(id),
    FOREIGN KEY (status_id) REFERENCES statuses(id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_epics_project ON epics(project_id);
CREATE INDEX IF NOT EXISTS idx_epics_status ON epics(status_id);
CREATE INDEX IF NOT EXISTS idx_work_items_project ON work_items(project_id);
CREATE INDEX IF NOT EXISTS idx_work_items_epic ON work_items(epic_id);
CREATE INDEX IF NOT EXISTS idx_work_items_status ON work_items(status_id);
CREATE INDEX IF NOT EXISTS idx_work_items_parent ON work_items(parent_id);
CREATE INDEX IF NOT EXISTS idx_boards_project ON boards(project_id);
CREATE INDEX IF NOT EXISTS idx_board_columns_status ON board_columns(status_id);
"#;

const PROJECT_COLUMNS: &str = "id, key, name, description, owner, is_active, is_archived,
     created_at, updated_at, version";

const EPIC_COLUMNS: &str = "id, project_id, key, summary, description, assignee, status_id,
     priority, start_date, due_date, is_archived, created_at, updated_at, version";

const WORK_ITEM_COLUMNS: &str = "id, project_id, epic_id, key, type, summary, description,
     assignee, status_id, priority, parent_id, order_index, is_archived, created_at,
     updated_at, version";

const STATUS_COLUMNS: &str =
    "id, name, color, order_index, is_default, is_completed, is_cancelled, is_active";

const COLUMN_COLUMNS: &str = "id, board_id, status_id, order_index, wip_limit, is_collapsed";

const DATE_FORMAT: &str = "%Y-%m-%d";

fn conversion_error(message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(Error::CorruptedData(message)),
    )
}

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value
        .parse()
        .map_err(|_| conversion_error(format!("invalid value '{value}' in column '{column}'")))
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(format!("invalid timestamp '{value}' in column '{column}'")))
}

/// Parse an optional calendar date from the database.
fn parse_date_opt(
    value: Option<String>,
    column: &str,
) -> std::result::Result<Option<NaiveDate>, rusqlite::Error> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| conversion_error(format!("invalid date '{s}' in column '{column}'"))),
    }
}

fn parse_priority(value: i64) -> std::result::Result<u8, rusqlite::Error> {
    u8::try_from(value).map_err(|_| conversion_error(format!("invalid priority {value}")))
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;
    Ok(Project {
        id: row.get(0)?,
        key: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        owner: row.get(4)?,
        is_active: row.get(5)?,
        is_archived: row.get(6)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
        version: row.get(9)?,
    })
}

fn epic_from_row(row: &Row<'_>) -> rusqlite::Result<Epic> {
    let created_str: String = row.get(11)?;
    let updated_str: String = row.get(12)?;
    Ok(Epic {
        id: row.get(0)?,
        project_id: row.get(1)?,
        key: row.get(2)?,
        summary: row.get(3)?,
        description: row.get(4)?,
        assignee: row.get(5)?,
        status_id: row.get(6)?,
        priority: parse_priority(row.get(7)?)?,
        start_date: parse_date_opt(row.get(8)?, "start_date")?,
        due_date: parse_date_opt(row.get(9)?, "due_date")?,
        is_archived: row.get(10)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
        version: row.get(13)?,
    })
}

fn work_item_from_row(row: &Row<'_>) -> rusqlite::Result<WorkItem> {
    let type_str: String = row.get(4)?;
    let created_str: String = row.get(13)?;
    let updated_str: String = row.get(14)?;
    Ok(WorkItem {
        id: row.get(0)?,
        project_id: row.get(1)?,
        epic_id: row.get(2)?,
        key: row.get(3)?,
        item_type: parse_db(&type_str, "type")?,
        summary: row.get(5)?,
        description: row.get(6)?,
        assignee: row.get(7)?,
        status_id: row.get(8)?,
        priority: parse_priority(row.get(9)?)?,
        parent_id: row.get(10)?,
        order_index: row.get(11)?,
        is_archived: row.get(12)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
        version: row.get(15)?,
    })
}

fn status_from_row(row: &Row<'_>) -> rusqlite::Result<Status> {
    Ok(Status {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        order_index: row.get(3)?,
        is_default: row.get(4)?,
        is_completed: row.get(5)?,
        is_cancelled: row.get(6)?,
        is_active: row.get(7)?,
    })
}

fn board_from_row(row: &Row<'_>) -> rusqlite::Result<Board> {
    let created_str: String = row.get(4)?;
    Ok(Board {
        id: row.get(0)?,
        project_id: row.get(1)?,
        name: row.get(2)?,
        is_default: row.get(3)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

fn column_from_row(row: &Row<'_>) -> rusqlite::Result<BoardColumn> {
    Ok(BoardColumn {
        id: row.get(0)?,
        board_id: row.get(1)?,
        status_id: row.get(2)?,
        order_index: row.get(3)?,
        wip_limit: row.get(4)?,
        is_collapsed: row.get(5)?,
    })
}

fn sqlite_code(err: &rusqlite::Error) -> Option<ErrorCode> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => Some(e.code),
        _ => None,
    }
}

/// Returns true if the error is a UNIQUE constraint violation.
pub fn is_unique_constraint_error(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, msg) => {
            e.code == ErrorCode::ConstraintViolation
                && msg.as_deref().is_none_or(|m| m.contains("UNIQUE"))
        }
        _ => false,
    }
}

/// Maps lock contention to [`Error::Conflict`]; other failures stay storage errors.
fn map_write_error(err: rusqlite::Error, what: &str) -> Error {
    match sqlite_code(&err) {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
            tracing::warn!(%what, "database busy");
            Error::Conflict(what.to_string())
        }
        _ => Error::Database(err),
    }
}

/// Maps a failed insert, turning UNIQUE violations into [`Error::DuplicateKey`].
fn map_insert_error(err: rusqlite::Error, entity: &'static str, key: &str) -> Error {
    if is_unique_constraint_error(&err) {
        Error::DuplicateKey {
            entity,
            key: key.to_string(),
        }
    } else {
        map_write_error(err, entity)
    }
}

/// Versioned full-row update of a work item. Returns the affected row count.
fn write_work_item(conn: &Connection, item: &WorkItem) -> Result<usize> {
    conn.execute(
        "UPDATE work_items SET epic_id = ?1, type = ?2, summary = ?3, description = ?4,
         assignee = ?5, status_id = ?6, priority = ?7, parent_id = ?8,
         order_index = ?9, is_archived = ?10, updated_at = ?11,
         version = version + 1
         WHERE id = ?12 AND version = ?13",
        params![
            item.epic_id,
            item.item_type.as_str(),
            item.summary,
            item.description,
            item.assignee,
            item.status_id,
            item.priority,
            item.parent_id,
            item.order_index,
            item.is_archived,
            item.updated_at.to_rfc3339(),
            item.id,
            item.version,
        ],
    )
    .map_err(|e| map_write_error(e, "work item"))
}

/// Writes `(id, order_index)` pairs, skipping rows that already hold their index.
fn write_order_indexes(
    conn: &Connection,
    indexes: &[(i64, i64)],
    updated_at: DateTime<Utc>,
) -> Result<()> {
    let mut stmt = conn.prepare(
        "UPDATE work_items SET order_index = ?1, updated_at = ?2, version = version + 1
         WHERE id = ?3 AND (order_index IS NULL OR order_index != ?1)",
    )?;
    let updated_str = updated_at.to_rfc3339();
    for (id, index) in indexes {
        stmt.execute(params![index, updated_str, id])
            .map_err(|e| map_write_error(e, "work item order"))?;
    }
    Ok(())
}

/// Run schema creation on a database connection.
///
/// Every statement is idempotent, so this is safe on existing databases.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with planning operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    fn immediate(&self) -> Result<Transaction<'_>> {
        Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)
            .map_err(|e| map_write_error(e, "transaction"))
    }

    fn row_exists(&self, table: &str, id: i64) -> Result<bool> {
        let sql = format!("SELECT COUNT(*) > 0 FROM {table} WHERE id = ?1");
        let exists: bool = self.conn.query_row(&sql, params![id], |row| row.get(0))?;
        Ok(exists)
    }

    /// Resolves a zero-row versioned update into `Conflict` or `NotFound`.
    fn stale_update(&self, table: &str, entity: &'static str, id: i64, key: &str) -> Error {
        match self.row_exists(table, id) {
            Ok(true) => {
                tracing::warn!(%entity, %key, "stale version");
                Error::Conflict(format!("{entity} {key}"))
            }
            Ok(false) => Error::not_found(entity, key),
            Err(e) => e,
        }
    }

    fn query_list<T>(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
        map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl KeyCounterStore for Database {
    fn increment_key_counter(&self, project_key: &str, scope: KeyScope) -> Result<u64> {
        let tx = self.immediate()?;
        let value: i64 = tx
            .query_row(
                "INSERT INTO key_counters (project_key, scope, last_value) VALUES (?1, ?2, 1)
                 ON CONFLICT (project_key, scope) DO UPDATE SET last_value = last_value + 1
                 RETURNING last_value",
                params![project_key, scope.as_str()],
                |row| row.get(0),
            )
            .map_err(|e| map_write_error(e, "key counter"))?;
        tx.commit().map_err(|e| map_write_error(e, "key counter"))?;
        u64::try_from(value)
            .map_err(|_| Error::CorruptedData(format!("negative key counter {value}")))
    }

    fn current_key_counter(&self, project_key: &str, scope: KeyScope) -> Result<u64> {
        let value: Option<i64> = self
            .conn
            .query_row(
                "SELECT last_value FROM key_counters WHERE project_key = ?1 AND scope = ?2",
                params![project_key, scope.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        let value = value.unwrap_or(0);
        u64::try_from(value)
            .map_err(|_| Error::CorruptedData(format!("negative key counter {value}")))
    }
}

impl PlanningStore for Database {
    fn insert_project(&self, project: &Project) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO projects (key, name, description, owner, is_active, is_archived,
                 created_at, updated_at, version)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    project.key,
                    project.name,
                    project.description,
                    project.owner,
                    project.is_active,
                    project.is_archived,
                    project.created_at.to_rfc3339(),
                    project.updated_at.to_rfc3339(),
                    project.version,
                ],
            )
            .map_err(|e| map_insert_error(e, "project", &project.key))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_project(&self, id: i64) -> Result<Project> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
        let project = self
            .conn
            .query_row(&sql, params![id], project_from_row)
            .optional()?;
        project.ok_or_else(|| Error::not_found("project", format!("#{id}")))
    }

    fn find_project_by_key(&self, key: &str) -> Result<Option<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE key = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![key], project_from_row)
            .optional()?)
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY key");
        self.query_list(&sql, [], project_from_row)
    }

    fn update_project(&self, project: &Project) -> Result<i64> {
        let affected = self
            .conn
            .execute(
                "UPDATE projects SET name = ?1, description = ?2, owner = ?3, is_active = ?4,
                 is_archived = ?5, updated_at = ?6, version = version + 1
                 WHERE id = ?7 AND version = ?8",
                params![
                    project.name,
                    project.description,
                    project.owner,
                    project.is_active,
                    project.is_archived,
                    project.updated_at.to_rfc3339(),
                    project.id,
                    project.version,
                ],
            )
            .map_err(|e| map_write_error(e, "project"))?;
        if affected == 0 {
            return Err(self.stale_update("projects", "project", project.id, &project.key));
        }
        Ok(project.version + 1)
    }

    fn insert_epic(&self, epic: &Epic) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO epics (project_id, key, summary, description, assignee, status_id,
                 priority, start_date, due_date, is_archived, created_at, updated_at, version)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    epic.project_id,
                    epic.key,
                    epic.summary,
                    epic.description,
                    epic.assignee,
                    epic.status_id,
                    epic.priority,
                    format_date(epic.start_date),
                    format_date(epic.due_date),
                    epic.is_archived,
                    epic.created_at.to_rfc3339(),
                    epic.updated_at.to_rfc3339(),
                    epic.version,
                ],
            )
            .map_err(|e| map_insert_error(e, "epic", &epic.key))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_epic(&self, id: i64) -> Result<Epic> {
        let sql = format!("SELECT {EPIC_COLUMNS} FROM epics WHERE id = ?1");
        let epic = self
            .conn
            .query_row(&sql, params![id], epic_from_row)
            .optional()?;
        epic.ok_or_else(|| Error::not_found("epic", format!("#{id}")))
    }

    fn find_epic_by_key(&self, key: &str) -> Result<Option<Epic>> {
        let sql = format!("SELECT {EPIC_COLUMNS} FROM epics WHERE key = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![key], epic_from_row)
            .optional()?)
    }

    fn list_epics(&self, project_id: i64) -> Result<Vec<Epic>> {
        let sql = format!("SELECT {EPIC_COLUMNS} FROM epics WHERE project_id = ?1 ORDER BY id");
        self.query_list(&sql, params![project_id], epic_from_row)
    }

    fn update_epic(&self, epic: &Epic) -> Result<i64> {
        let affected = self
            .conn
            .execute(
                "UPDATE epics SET summary = ?1, description = ?2, assignee = ?3, status_id = ?4,
                 priority = ?5, start_date = ?6, due_date = ?7, is_archived = ?8,
                 updated_at = ?9, version = version + 1
                 WHERE id = ?10 AND version = ?11",
                params![
                    epic.summary,
                    epic.description,
                    epic.assignee,
                    epic.status_id,
                    epic.priority,
                    format_date(epic.start_date),
                    format_date(epic.due_date),
                    epic.is_archived,
                    epic.updated_at.to_rfc3339(),
                    epic.id,
                    epic.version,
                ],
            )
            .map_err(|e| map_write_error(e, "epic"))?;
        if affected == 0 {
            return Err(self.stale_update("epics", "epic", epic.id, &epic.key));
        }
        Ok(epic.version + 1)
    }

    fn insert_work_item(&self, item: &WorkItem) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO work_items (project_id, epic_id, key, type, summary, description,
                 assignee, status_id, priority, parent_id, order_index, is_archived,
                 created_at, updated_at, version)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
                params![
                    item.project_id,
                    item.epic_id,
                    item.key,
                    item.item_type.as_str(),
                    item.summary,
                    item.description,
                    item.assignee,
                    item.status_id,
                    item.priority,
                    item.parent_id,
                    item.order_index,
                    item.is_archived,
                    item.created_at.to_rfc3339(),
                    item.updated_at.to_rfc3339(),
                    item.version,
                ],
            )
            .map_err(|e| map_insert_error(e, "work item", &item.key))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_work_item(&self, id: i64) -> Result<WorkItem> {
        let sql = format!("SELECT {WORK_ITEM_COLUMNS} FROM work_items WHERE id = ?1");
        let item = self
            .conn
            .query_row(&sql, params![id], work_item_from_row)
            .optional()?;
        item.ok_or_else(|| Error::not_found("work item", format!("#{id}")))
    }

    fn find_work_item_by_key(&self, key: &str) -> Result<Option<WorkItem>> {
        let sql = format!("SELECT {WORK_ITEM_COLUMNS} FROM work_items WHERE key = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![key], work_item_from_row)
            .optional()?)
    }

    fn list_work_items(&self, project_id: i64) -> Result<Vec<WorkItem>> {
        let sql = format!(
            "SELECT {WORK_ITEM_COLUMNS} FROM work_items WHERE project_id = ?1 ORDER BY id"
        );
        self.query_list(&sql, params![project_id], work_item_from_row)
    }

    fn list_work_items_for_epic(&self, epic_id: i64) -> Result<Vec<WorkItem>> {
        let sql =
            format!("SELECT {WORK_ITEM_COLUMNS} FROM work_items WHERE epic_id = ?1 ORDER BY id");
        self.query_list(&sql, params![epic_id], work_item_from_row)
    }

    fn update_work_item(&self, item: &WorkItem) -> Result<i64> {
        if write_work_item(&self.conn, item)? == 0 {
            return Err(self.stale_update("work_items", "work item", item.id, &item.key));
        }
        Ok(item.version + 1)
    }

    fn update_order_indexes(
        &self,
        indexes: &[(i64, i64)],
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let tx = self.immediate()?;
        write_order_indexes(&tx, indexes, updated_at)?;
        tx.commit()
            .map_err(|e| map_write_error(e, "work item order"))?;
        Ok(())
    }

    fn move_work_item(&self, item: &WorkItem, indexes: &[(i64, i64)]) -> Result<i64> {
        let tx = self.immediate()?;
        if write_work_item(&tx, item)? == 0 {
            drop(tx);
            return Err(self.stale_update("work_items", "work item", item.id, &item.key));
        }
        write_order_indexes(&tx, indexes, item.updated_at)?;
        tx.commit()
            .map_err(|e| map_write_error(e, "work item move"))?;
        Ok(item.version + 1)
    }

    fn insert_status(&self, status: &Status) -> Result<i64> {
        let tx = self.immediate()?;
        if status.is_default {
            tx.execute("UPDATE statuses SET is_default = 0 WHERE is_default = 1", [])
                .map_err(|e| map_write_error(e, "status"))?;
        }
        tx.execute(
            "INSERT INTO statuses (name, color, order_index, is_default, is_completed,
             is_cancelled, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                status.name,
                status.color,
                status.order_index,
                status.is_default,
                status.is_completed,
                status.is_cancelled,
                status.is_active,
            ],
        )
        .map_err(|e| map_insert_error(e, "status", &status.name))?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|e| map_write_error(e, "status"))?;
        Ok(id)
    }

    fn get_status(&self, id: i64) -> Result<Status> {
        let sql = format!("SELECT {STATUS_COLUMNS} FROM statuses WHERE id = ?1");
        let status = self
            .conn
            .query_row(&sql, params![id], status_from_row)
            .optional()?;
        status.ok_or_else(|| Error::not_found("status", format!("#{id}")))
    }

    fn list_statuses(&self) -> Result<Vec<Status>> {
        let sql = format!("SELECT {STATUS_COLUMNS} FROM statuses ORDER BY order_index, id");
        self.query_list(&sql, [], status_from_row)
    }

    fn update_status(&self, status: &Status) -> Result<()> {
        let affected = self
            .conn
            .execute(
                "UPDATE statuses SET name = ?1, color = ?2, order_index = ?3, is_default = ?4,
                 is_completed = ?5, is_cancelled = ?6, is_active = ?7
                 WHERE id = ?8",
                params![
                    status.name,
                    status.color,
                    status.order_index,
                    status.is_default,
                    status.is_completed,
                    status.is_cancelled,
                    status.is_active,
                    status.id,
                ],
            )
            .map_err(|e| map_insert_error(e, "status", &status.name))?;
        if affected == 0 {
            return Err(Error::not_found("status", &status.name));
        }
        Ok(())
    }

    fn delete_status(&self, id: i64) -> Result<()> {
        let tx = self.immediate()?;
        tx.execute(
            "DELETE FROM status_transitions WHERE from_status_id = ?1 OR to_status_id = ?1",
            params![id],
        )
        .map_err(|e| map_write_error(e, "status"))?;
        let affected = tx
            .execute("DELETE FROM statuses WHERE id = ?1", params![id])
            .map_err(|e| map_write_error(e, "status"))?;
        if affected == 0 {
            return Err(Error::not_found("status", format!("#{id}")));
        }
        tx.commit().map_err(|e| map_write_error(e, "status"))?;
        Ok(())
    }

    fn count_status_references(&self, id: i64) -> Result<StatusReferences> {
        let count = |table: &str| -> Result<usize> {
            let sql = format!("SELECT COUNT(*) FROM {table} WHERE status_id = ?1");
            let n: i64 = self.conn.query_row(&sql, params![id], |row| row.get(0))?;
            Ok(usize::try_from(n).unwrap_or(0))
        };
        Ok(StatusReferences {
            epics: count("epics")?,
            work_items: count("work_items")?,
            board_columns: count("board_columns")?,
        })
    }

    fn list_transitions(&self) -> Result<Vec<StatusTransition>> {
        self.query_list(
            "SELECT from_status_id, to_status_id, is_allowed FROM status_transitions
             ORDER BY from_status_id, to_status_id",
            [],
            |row| {
                Ok(StatusTransition {
                    from_status_id: row.get(0)?,
                    to_status_id: row.get(1)?,
                    is_allowed: row.get(2)?,
                })
            },
        )
    }

    fn upsert_transition(&self, transition: &StatusTransition) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO status_transitions (from_status_id, to_status_id, is_allowed)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (from_status_id, to_status_id)
                 DO UPDATE SET is_allowed = excluded.is_allowed",
                params![
                    transition.from_status_id,
                    transition.to_status_id,
                    transition.is_allowed,
                ],
            )
            .map_err(|e| map_write_error(e, "status transition"))?;
        Ok(())
    }

    fn seed_statuses(&self, statuses: &[Status], transitions: &[(usize, usize)]) -> Result<bool> {
        let tx = self.immediate()?;
        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM statuses", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(false);
        }

        let mut ids = Vec::with_capacity(statuses.len());
        for status in statuses {
            tx.execute(
                "INSERT INTO statuses (name, color, order_index, is_default, is_completed,
                 is_cancelled, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    status.name,
                    status.color,
                    status.order_index,
                    status.is_default,
                    status.is_completed,
                    status.is_cancelled,
                    status.is_active,
                ],
            )
            .map_err(|e| map_insert_error(e, "status", &status.name))?;
            ids.push(tx.last_insert_rowid());
        }

        for &(from, to) in transitions {
            let (Some(from_id), Some(to_id)) = (ids.get(from), ids.get(to)) else {
                return Err(Error::InvalidInput(format!(
                    "seed transition ({from}, {to}) is out of range"
                )));
            };
            tx.execute(
                "INSERT INTO status_transitions (from_status_id, to_status_id, is_allowed)
                 VALUES (?1, ?2, 1)",
                params![from_id, to_id],
            )
            .map_err(|e| map_write_error(e, "status transition"))?;
        }

        tx.commit().map_err(|e| map_write_error(e, "statuses"))?;
        Ok(true)
    }

    fn insert_board(&self, board: &Board, columns: &[BoardColumn]) -> Result<i64> {
        let tx = self.immediate()?;
        tx.execute(
            "INSERT INTO boards (project_id, name, is_default, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                board.project_id,
                board.name,
                board.is_default,
                board.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| map_insert_error(e, "board", &board.name))?;
        let board_id = tx.last_insert_rowid();

        for column in columns {
            tx.execute(
                "INSERT INTO board_columns (board_id, status_id, order_index, wip_limit,
                 is_collapsed)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    board_id,
                    column.status_id,
                    column.order_index,
                    column.wip_limit,
                    column.is_collapsed,
                ],
            )
            .map_err(|e| map_insert_error(e, "board column", &board.name))?;
        }

        tx.commit().map_err(|e| map_write_error(e, "board"))?;
        Ok(board_id)
    }

    fn get_board(&self, id: i64) -> Result<Board> {
        let board = self
            .conn
            .query_row(
                "SELECT id, project_id, name, is_default, created_at FROM boards WHERE id = ?1",
                params![id],
                board_from_row,
            )
            .optional()?;
        board.ok_or_else(|| Error::not_found("board", format!("#{id}")))
    }

    fn list_boards(&self, project_id: i64) -> Result<Vec<Board>> {
        self.query_list(
            "SELECT id, project_id, name, is_default, created_at FROM boards
             WHERE project_id = ?1 ORDER BY id",
            params![project_id],
            board_from_row,
        )
    }

    fn list_columns(&self, board_id: i64) -> Result<Vec<BoardColumn>> {
        let sql = format!(
            "SELECT {COLUMN_COLUMNS} FROM board_columns WHERE board_id = ?1
             ORDER BY order_index, id"
        );
        self.query_list(&sql, params![board_id], column_from_row)
    }

    fn update_columns(&self, columns: &[BoardColumn]) -> Result<()> {
        let tx = self.immediate()?;
        {
            let mut stmt = tx.prepare(
                "UPDATE board_columns SET order_index = ?1, wip_limit = ?2, is_collapsed = ?3
                 WHERE id = ?4",
            )?;
            for column in columns {
                let affected = stmt
                    .execute(params![
                        column.order_index,
                        column.wip_limit,
                        column.is_collapsed,
                        column.id,
                    ])
                    .map_err(|e| map_write_error(e, "board column"))?;
                if affected == 0 {
                    return Err(Error::not_found("board column", format!("#{}", column.id)));
                }
            }
        }
        tx.commit().map_err(|e| map_write_error(e, "board column"))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
