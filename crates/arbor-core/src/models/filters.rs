//! Filter types for querying tasks.

use super::TaskStatus;

/// Filter options for listing tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Only direct subtasks of this task
    pub parent_id: Option<u64>,

    /// Only tasks without a parent
    pub roots_only: bool,

    /// Only tasks in this status
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Filter for the top level of the hierarchy.
    pub fn roots() -> Self {
        Self {
            roots_only: true,
            ..Default::default()
        }
    }

    /// Filter for the direct subtasks of a task.
    pub fn children_of(parent_id: u64) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Default::default()
        }
    }
}
