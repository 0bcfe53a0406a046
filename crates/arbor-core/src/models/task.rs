//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Efforts, TaskStatus};

/// A single trackable unit of work.
///
/// Effort fields hold the task's own effort only. Totals including subtasks
/// come from [`TaskDetails::calculate_efforts`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// Display name of the task
    pub name: String,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Informal list of assignees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performers: Option<String>,

    /// Current status of the task
    pub status: TaskStatus,

    /// Planned effort for this task alone
    pub planned_effort: f64,

    /// Actual effort spent on this task alone
    pub actual_effort: f64,

    /// ID of the parent task, `None` for root tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task reached `completed` (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Task {
    /// Whether the task sits at the top of a hierarchy.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Record a new actual effort for the task.
    ///
    /// The value is stored as the task's own `actual_effort`; totals are
    /// never persisted.
    pub fn set_total_actual_effort(&mut self, value: f64) {
        self.actual_effort = value;
    }
}

/// A task together with its direct subtasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDetails {
    /// The task itself
    #[serde(flatten)]
    pub task: Task,

    /// Direct subtasks, ordered by ID
    #[serde(default)]
    pub subtasks: Vec<Task>,
}

impl TaskDetails {
    /// Create details from a task and its direct subtasks.
    pub fn new(task: Task, subtasks: Vec<Task>) -> Self {
        Self { task, subtasks }
    }

    /// A task is terminal when it has no subtasks.
    pub fn is_terminal(&self) -> bool {
        self.subtasks.is_empty()
    }

    /// Compute the effort record for this task and its direct subtasks.
    pub fn calculate_efforts(&self) -> Efforts {
        Efforts::calculate(&self.task, &self.subtasks)
    }

    pub fn task_planned_effort(&self) -> f64 {
        self.calculate_efforts().task_planned_effort
    }

    pub fn subtask_planned_effort(&self) -> f64 {
        self.calculate_efforts().subtask_planned_effort
    }

    pub fn task_actual_effort(&self) -> f64 {
        self.calculate_efforts().task_actual_effort
    }

    pub fn subtask_actual_effort(&self) -> f64 {
        self.calculate_efforts().subtask_actual_effort
    }

    pub fn total_planned_effort(&self) -> f64 {
        self.calculate_efforts().total_planned_effort
    }

    pub fn total_actual_effort(&self) -> f64 {
        self.calculate_efforts().total_actual_effort
    }
}
