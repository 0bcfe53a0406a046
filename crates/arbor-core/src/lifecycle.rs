//! Task status state machine.
//!
//! | requested       | allowed from            |
//! |-----------------|-------------------------|
//! | `completed`     | `in_progress` only      |
//! | `paused`        | `in_progress` only      |
//! | delete          | any, if the task is terminal |
//! | `assigned`, `in_progress` | any           |
//!
//! Requesting the status a task already has is not a transition and is never
//! checked against this table.

use std::fmt;

use crate::{
    error::{Result, TrackerError},
    models::{Task, TaskStatus},
};

/// A requested change of lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move the task to a stored status
    To(TaskStatus),
    /// Remove the task; not a stored status
    Delete,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::To(status) => write!(f, "{status}"),
            Transition::Delete => write!(f, "deleted"),
        }
    }
}

/// Whether the status table allows `new` from `old`.
///
/// `Delete` is allowed from any status here; the terminal requirement is
/// checked separately by [`check_transition`].
pub fn can_transition(new: Transition, old: TaskStatus) -> bool {
    match new {
        Transition::To(TaskStatus::Completed) | Transition::To(TaskStatus::Paused) => {
            old == TaskStatus::InProgress
        }
        Transition::To(TaskStatus::Assigned) | Transition::To(TaskStatus::InProgress) => true,
        Transition::Delete => true,
    }
}

/// Validate a transition, producing the user-facing rejection reason.
///
/// `terminal` tells whether the task currently has no subtasks; it only
/// matters for [`Transition::Delete`].
pub fn check_transition(task: &Task, new: Transition, terminal: bool) -> Result<()> {
    match new {
        Transition::Delete if terminal => Ok(()),
        Transition::Delete => Err(TrackerError::HasSubtasks { id: task.id }),
        Transition::To(_) if can_transition(new, task.status) => Ok(()),
        Transition::To(to) => Err(TrackerError::InvalidTransition {
            from: task.status,
            to,
            reason: rejection_reason(task.status, to),
        }),
    }
}

fn rejection_reason(from: TaskStatus, to: TaskStatus) -> String {
    match (from, to) {
        (TaskStatus::Assigned, TaskStatus::Completed) => {
            "Cannot complete a task that has not been started".to_string()
        }
        (TaskStatus::Assigned, TaskStatus::Paused) => {
            "Cannot pause a task that is not yet in progress".to_string()
        }
        _ => format!("Invalid status transition from '{from}' to '{to}'"),
    }
}

/// IDs of the given subtasks whose status is one of `statuses`.
pub fn blocking_subtasks(subtasks: &[Task], statuses: &[TaskStatus]) -> Vec<u64> {
    subtasks
        .iter()
        .filter(|s| statuses.contains(&s.status))
        .map(|s| s.id)
        .collect()
}

/// Statuses of a direct subtask that block completing its parent.
pub const COMPLETION_BLOCKERS: [TaskStatus; 2] = [TaskStatus::InProgress, TaskStatus::Assigned];

/// Statuses a direct subtask must not hold once its parent has completed.
pub const OPEN_STATUSES: [TaskStatus; 3] =
    [TaskStatus::InProgress, TaskStatus::Assigned, TaskStatus::Paused];
