//! Validated request types for creating and updating tasks.

use super::TaskStatus;

/// Validated fields for a new task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub description: Option<String>,
    pub performers: Option<String>,
    pub status: TaskStatus,
    pub planned_effort: f64,
    pub actual_effort: f64,
    pub parent_id: Option<u64>,
}

impl NewTask {
    /// Create a new task request with defaults for everything but the name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Validated partial update for an existing task.
///
/// `None` leaves a field untouched. `parent_id` is doubly optional so a
/// caller can move a subtask back to the root (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub performers: Option<String>,
    pub status: Option<TaskStatus>,
    pub planned_effort: Option<f64>,
    pub actual_effort: Option<f64>,
    pub parent_id: Option<Option<u64>>,
}

impl TaskChanges {
    /// A change set touching only the status.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Whether the change set would modify anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.performers.is_none()
            && self.status.is_none()
            && self.planned_effort.is_none()
            && self.actual_effort.is_none()
            && self.parent_id.is_none()
    }
}
