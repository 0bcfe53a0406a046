//! Task summary types for list views.

use serde::{Deserialize, Serialize};

use super::{Task, TaskDetails, TaskStatus};

/// A task with counts of its direct subtasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSummary {
    #[serde(flatten)]
    pub task: Task,
    /// Number of direct subtasks
    pub total_subtasks: u32,
    /// Number of direct subtasks already completed
    pub completed_subtasks: u32,
}

impl TaskSummary {
    /// Whether the task has no subtasks.
    pub fn is_terminal(&self) -> bool {
        self.total_subtasks == 0
    }
}

impl From<&TaskDetails> for TaskSummary {
    fn from(details: &TaskDetails) -> Self {
        let total_subtasks = details.subtasks.len() as u32;
        let completed_subtasks = details
            .subtasks
            .iter()
            .filter(|s| s.status == TaskStatus::Completed)
            .count() as u32;

        Self {
            task: details.task.clone(),
            total_subtasks,
            completed_subtasks,
        }
    }
}
