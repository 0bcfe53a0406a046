//! Task CRUD operations and queries.

use std::collections::HashSet;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    lifecycle::{check_transition, Transition},
    models::{NewTask, Task, TaskDetails, TaskFilter, TaskStatus, TaskSummary},
};

const TASK_COLUMNS: &str = "id, name, description, performers, status, planned_effort, actual_effort, parent_id, created_at, completed_at";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (name, description, performers, status, planned_effort, actual_effort, parent_id, created_at, completed_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET name = ?1, description = ?2, performers = ?3, status = ?4, planned_effort = ?5, actual_effort = ?6, parent_id = ?7, completed_at = ?8 WHERE id = ?9";
const COMPLETE_TASK_SQL: &str =
    "UPDATE tasks SET status = 'completed', completed_at = COALESCE(completed_at, ?1) WHERE id = ?2";
const SELECT_PARENT_ID_SQL: &str = "SELECT parent_id FROM tasks WHERE id = ?1";
const COUNT_SUBTASKS_SQL: &str = "SELECT COUNT(*) FROM tasks WHERE parent_id = ?1";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const TASK_SUMMARIES_VIEW: &str = "task_summaries";

/// Build a Task from a row selected with [`TASK_COLUMNS`].
fn build_task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let status_str: String = row.get(4)?;
    let status = status_str.parse::<TaskStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            format!("Invalid status: {status_str}").into(),
        )
    })?;

    let completed_at = row
        .get::<_, Option<String>>(9)?
        .map(|s| s.parse::<Timestamp>())
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;

    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        description: row.get(2)?,
        performers: row.get(3)?,
        status,
        planned_effort: row.get(5)?,
        actual_effort: row.get(6)?,
        parent_id: row.get::<_, Option<i64>>(7)?.map(|id| id as u64),
        created_at: row
            .get::<_, String>(8)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?,
        completed_at,
    })
}

/// Empty strings clear optional text fields.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub(super) fn fetch_task(conn: &Connection, id: u64) -> Result<Option<Task>> {
    conn.query_row(
        &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
        params![id as i64],
        build_task_from_row,
    )
    .optional()
    .db_context("Failed to get task")
}

pub(super) fn require_task(conn: &Connection, id: u64) -> Result<Task> {
    fetch_task(conn, id)?.ok_or(TrackerError::TaskNotFound { id })
}

/// Direct subtasks of a task, ordered by ID.
pub(super) fn fetch_subtasks(conn: &Connection, parent_id: u64) -> Result<Vec<Task>> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE parent_id = ?1 ORDER BY id"
        ))
        .db_context("Failed to prepare query")?;

    let subtasks = stmt
        .query_map(params![parent_id as i64], build_task_from_row)
        .db_context("Failed to query subtasks")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch subtasks")?;

    Ok(subtasks)
}

/// Whether a task has no direct subtasks.
pub(super) fn is_terminal(conn: &Connection, id: u64) -> Result<bool> {
    conn.query_row(COUNT_SUBTASKS_SQL, params![id as i64], |row| {
        row.get::<_, i64>(0)
    })
    .map(|count| count == 0)
    .db_context("Failed to count subtasks")
}

/// Persist every mutable column of a task.
pub(super) fn write_task(conn: &Connection, task: &Task) -> Result<()> {
    let changed = conn
        .execute(
            UPDATE_TASK_SQL,
            params![
                task.name,
                non_empty(task.description.as_deref()),
                non_empty(task.performers.as_deref()),
                task.status.as_str(),
                task.planned_effort,
                task.actual_effort,
                task.parent_id.map(|id| id as i64),
                task.completed_at.map(|ts| ts.to_string()),
                task.id as i64
            ],
        )
        .db_context("Failed to update task")?;

    if changed == 0 {
        return Err(TrackerError::TaskNotFound { id: task.id });
    }
    Ok(())
}

/// Mark a task completed, keeping an existing completion time.
pub(super) fn mark_completed(conn: &Connection, id: u64, now: Timestamp) -> Result<()> {
    conn.execute(COMPLETE_TASK_SQL, params![now.to_string(), id as i64])
        .db_context("Failed to complete subtask")?;
    Ok(())
}

/// Check that `task_id` may be placed under `parent_id`.
///
/// The parent must exist and must not be the task itself or one of its
/// descendants.
pub(super) fn ensure_valid_parent(conn: &Connection, task_id: u64, parent_id: u64) -> Result<Task> {
    let cycle = TrackerError::HierarchyCycle {
        id: task_id,
        parent_id,
    };
    if task_id == parent_id {
        return Err(cycle);
    }

    let parent = require_task(conn, parent_id)?;

    let mut seen = HashSet::from([parent_id]);
    let mut cursor = parent.parent_id;
    while let Some(ancestor) = cursor {
        if ancestor == task_id {
            return Err(cycle);
        }
        if !seen.insert(ancestor) {
            // Stored data already loops; refuse to extend it
            return Err(cycle);
        }
        cursor = conn
            .query_row(SELECT_PARENT_ID_SQL, params![ancestor as i64], |row| {
                row.get::<_, Option<i64>>(0)
            })
            .optional()
            .db_context("Failed to walk task ancestors")?
            .flatten()
            .map(|id| id as u64);
    }

    Ok(parent)
}

impl super::Database {
    /// Creates a new task, optionally as a subtask of an existing task.
    pub fn create_task(&mut self, new_task: &NewTask) -> Result<Task> {
        let tx = self.write_transaction()?;

        if let Some(parent_id) = new_task.parent_id {
            let parent = require_task(&tx, parent_id)?;
            if parent.status.is_completed() && !new_task.status.is_completed() {
                return Err(TrackerError::ParentCompleted { parent_id });
            }
        }

        let now = Timestamp::now();
        let completed_at = new_task.status.is_completed().then_some(now);

        tx.execute(
            INSERT_TASK_SQL,
            params![
                new_task.name,
                non_empty(new_task.description.as_deref()),
                non_empty(new_task.performers.as_deref()),
                new_task.status.as_str(),
                new_task.planned_effort,
                new_task.actual_effort,
                new_task.parent_id.map(|id| id as i64),
                now.to_string(),
                completed_at.map(|ts| ts.to_string())
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        let task = require_task(&tx, id)?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Created task {} ({})", task.id, task.status);
        Ok(task)
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<Task>> {
        fetch_task(&self.connection, id)
    }

    /// Retrieves a task together with its direct subtasks.
    pub fn get_task_details(&self, id: u64) -> Result<Option<TaskDetails>> {
        match fetch_task(&self.connection, id)? {
            Some(task) => {
                let subtasks = fetch_subtasks(&self.connection, id)?;
                Ok(Some(TaskDetails::new(task, subtasks)))
            }
            None => Ok(None),
        }
    }

    /// Whether a task has no subtasks.
    pub fn is_terminal(&self, id: u64) -> Result<bool> {
        require_task(&self.connection, id)?;
        is_terminal(&self.connection, id)
    }

    /// Lists tasks with subtask counts, oldest first.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<TaskSummary>> {
        let mut query = format!(
            "SELECT {TASK_COLUMNS}, total_subtasks, completed_subtasks FROM {TASK_SUMMARIES_VIEW}"
        );

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(parent_id) = filter.parent_id {
            conditions.push("parent_id = ?");
            params_vec.push(Box::new(parent_id as i64));
        }

        if filter.roots_only {
            conditions.push("parent_id IS NULL");
        }

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], |row| {
                Ok(TaskSummary {
                    task: build_task_from_row(row)?,
                    total_subtasks: row.get::<_, i64>(10)? as u32,
                    completed_subtasks: row.get::<_, i64>(11)? as u32,
                })
            })
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(summaries)
    }

    /// Deletes a task. Only terminal tasks (without subtasks) can be deleted.
    pub fn delete_task(&mut self, id: u64) -> Result<Task> {
        let tx = self.write_transaction()?;

        let task = require_task(&tx, id)?;
        check_transition(&task, Transition::Delete, is_terminal(&tx, id)?)?;

        tx.execute(DELETE_TASK_SQL, params![id as i64])
            .db_context("Failed to delete task")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted task {id}");
        Ok(task)
    }
}
