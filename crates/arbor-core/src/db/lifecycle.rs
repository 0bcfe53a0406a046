//! Saving task changes through the status lifecycle.
//!
//! Every save runs in one transaction, in this order:
//!
//! 1. validate the requested status change (incomplete-subtask guard, then
//!    the transition table) and any parent change
//! 2. cascade completion to open subtasks, breadth first
//! 3. set or clear the task's own `completed_at`
//! 4. persist the task
//!
//! An error at any point drops the transaction and nothing is written.

use std::collections::VecDeque;

use jiff::Timestamp;
use log::{debug, info, warn};
use rusqlite::Connection;

use super::task_queries::{
    ensure_valid_parent, fetch_subtasks, mark_completed, require_task, write_task,
};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    lifecycle::{blocking_subtasks, check_transition, Transition, COMPLETION_BLOCKERS, OPEN_STATUSES},
    models::{Task, TaskChanges, TaskDetails, TaskStatus},
};

/// Apply the incomplete-subtask guard to `task` before it becomes completed.
fn ensure_no_blocking_subtasks(task_id: u64, subtasks: &[Task]) -> Result<()> {
    let blocking = blocking_subtasks(subtasks, &COMPLETION_BLOCKERS);
    if blocking.is_empty() {
        return Ok(());
    }
    Err(TrackerError::IncompleteSubtasks {
        id: task_id,
        subtask_ids: blocking,
    })
}

/// Complete every open task below `root_id`.
///
/// Cascaded completion is driven by the parent, so the transition table is not
/// consulted for the subtasks themselves; each one still refuses to complete
/// over its own assigned or in-progress subtasks. Returns the number of tasks
/// completed.
fn cascade_completion(conn: &Connection, root_id: u64, now: Timestamp) -> Result<usize> {
    let mut queue = VecDeque::from([root_id]);
    let mut completed = 0;

    while let Some(parent_id) = queue.pop_front() {
        for subtask in fetch_subtasks(conn, parent_id)? {
            if subtask.status.is_completed() {
                continue;
            }

            let grandchildren = fetch_subtasks(conn, subtask.id)?;
            ensure_no_blocking_subtasks(subtask.id, &grandchildren)?;

            debug!(
                "Cascading completion from task {parent_id} to subtask {} ({})",
                subtask.id, subtask.status
            );
            mark_completed(conn, subtask.id, now)?;
            completed += 1;
            queue.push_back(subtask.id);
        }
    }

    Ok(completed)
}

/// Validate and persist `updated` over the stored `current` version.
fn save(conn: &Connection, current: &Task, mut updated: Task) -> Result<Task> {
    let subtasks = fetch_subtasks(conn, current.id)?;
    let status_changed = updated.status != current.status;
    let parent_changed = updated.parent_id != current.parent_id;

    if status_changed {
        if updated.status.is_completed() {
            ensure_no_blocking_subtasks(current.id, &subtasks)?;
        }
        check_transition(current, Transition::To(updated.status), subtasks.is_empty()).map_err(
            |e| {
                info!(
                    "Rejected transition of task {} from {} to {}: {e}",
                    current.id, current.status, updated.status
                );
                e
            },
        )?;
    }

    if let Some(parent_id) = updated.parent_id {
        let parent = if parent_changed {
            ensure_valid_parent(conn, current.id, parent_id)?
        } else {
            require_task(conn, parent_id)?
        };
        if (status_changed || parent_changed)
            && parent.status.is_completed()
            && !updated.status.is_completed()
        {
            return Err(TrackerError::ParentCompleted { parent_id });
        }
    }

    let now = Timestamp::now();

    if updated.status.is_completed() {
        let cascaded = cascade_completion(conn, current.id, now)?;
        if cascaded > 0 {
            debug!("Completion of task {} cascaded to {cascaded} subtasks", current.id);
        }

        // Safety net: a correct cascade leaves nothing open below the task
        let remaining = blocking_subtasks(&fetch_subtasks(conn, current.id)?, &OPEN_STATUSES);
        if !remaining.is_empty() {
            warn!(
                "Subtasks {remaining:?} of task {} still open after cascade",
                current.id
            );
            return Err(TrackerError::IncompleteSubtasks {
                id: current.id,
                subtask_ids: remaining,
            });
        }

        if updated.completed_at.is_none() {
            updated.completed_at = Some(now);
        }
    } else {
        updated.completed_at = None;
    }

    write_task(conn, &updated)?;

    if status_changed {
        debug!(
            "Task {} moved from {} to {}",
            current.id, current.status, updated.status
        );
    }
    Ok(updated)
}

/// Produce the updated version of a task from a change set.
fn apply_changes(current: &Task, changes: TaskChanges) -> Task {
    let mut updated = current.clone();

    if let Some(name) = changes.name {
        updated.name = name;
    }
    if let Some(description) = changes.description {
        updated.description = Some(description).filter(|d| !d.trim().is_empty());
    }
    if let Some(performers) = changes.performers {
        updated.performers = Some(performers).filter(|p| !p.trim().is_empty());
    }
    if let Some(status) = changes.status {
        updated.status = status;
    }
    if let Some(planned) = changes.planned_effort {
        updated.planned_effort = planned;
    }
    if let Some(actual) = changes.actual_effort {
        updated.actual_effort = actual;
    }
    if let Some(parent_id) = changes.parent_id {
        updated.parent_id = parent_id;
    }

    updated
}

impl super::Database {
    /// Applies a change set to a task and saves it through the lifecycle.
    ///
    /// Returns the saved task with its direct subtasks as committed. An empty
    /// change set writes nothing and returns the stored task.
    pub fn update_task(&mut self, id: u64, changes: TaskChanges) -> Result<TaskDetails> {
        let tx = self.write_transaction()?;

        let current = require_task(&tx, id)?;
        if changes.is_empty() {
            debug!("No changes requested for task {id}");
            let subtasks = fetch_subtasks(&tx, id)?;
            return Ok(TaskDetails::new(current, subtasks));
        }

        let updated = apply_changes(&current, changes);
        let saved = save(&tx, &current, updated)?;
        let subtasks = fetch_subtasks(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TaskDetails::new(saved, subtasks))
    }

    /// Changes only the status of a task.
    pub fn update_status(&mut self, id: u64, status: TaskStatus) -> Result<TaskDetails> {
        self.update_task(id, TaskChanges::status(status))
    }

    /// Records the actual effort of a task.
    ///
    /// The value becomes the task's own actual effort; the returned details
    /// carry the recomputed totals.
    pub fn update_actual_effort(&mut self, id: u64, value: f64) -> Result<TaskDetails> {
        let tx = self.write_transaction()?;

        let current = require_task(&tx, id)?;
        let mut updated = current.clone();
        updated.set_total_actual_effort(value);
        let saved = save(&tx, &current, updated)?;
        let subtasks = fetch_subtasks(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TaskDetails::new(saved, subtasks))
    }
}
