//! Planned and actual effort aggregation.

use serde::{Deserialize, Serialize};

use super::Task;

/// Effort figures for a task and its direct subtasks.
///
/// Aggregation is one level deep: grandchildren are not included, and
/// nothing here is cached or stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Efforts {
    pub task_planned_effort: f64,
    pub subtask_planned_effort: f64,
    pub task_actual_effort: f64,
    pub subtask_actual_effort: f64,
    pub total_planned_effort: f64,
    pub total_actual_effort: f64,
}

impl Efforts {
    /// Aggregate a task's own effort with its direct subtasks' own effort.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor_core::models::{Efforts, Task, TaskStatus};
    /// use jiff::Timestamp;
    ///
    /// let task = |id, planned| Task {
    ///     id,
    ///     name: format!("Task {id}"),
    ///     description: None,
    ///     performers: None,
    ///     status: TaskStatus::Assigned,
    ///     planned_effort: planned,
    ///     actual_effort: 0.0,
    ///     parent_id: None,
    ///     created_at: Timestamp::now(),
    ///     completed_at: None,
    /// };
    ///
    /// let efforts = Efforts::calculate(&task(1, 10.0), &[task(2, 5.0), task(3, 3.0)]);
    /// assert_eq!(efforts.subtask_planned_effort, 8.0);
    /// assert_eq!(efforts.total_planned_effort, 18.0);
    /// ```
    pub fn calculate(task: &Task, subtasks: &[Task]) -> Self {
        // fold from +0.0: an empty f64 sum() yields -0.0
        let subtask_planned_effort = subtasks.iter().fold(0.0, |acc, s| acc + s.planned_effort);
        let subtask_actual_effort = subtasks.iter().fold(0.0, |acc, s| acc + s.actual_effort);

        Self {
            task_planned_effort: task.planned_effort,
            subtask_planned_effort,
            task_actual_effort: task.actual_effort,
            subtask_actual_effort,
            total_planned_effort: task.planned_effort + subtask_planned_effort,
            total_actual_effort: task.actual_effort + subtask_actual_effort,
        }
    }
}
