//! Collection wrapper for task lists.

use std::{fmt, ops::Index};

use crate::models::TaskSummary;

/// Newtype wrapper for displaying a list of tasks with their subtask counts.
///
/// # Examples
///
/// ```rust
/// use arbor_core::{
///     display::Tasks,
///     models::{Task, TaskStatus, TaskSummary},
/// };
/// use jiff::Timestamp;
///
/// let summary = TaskSummary {
///     task: Task {
///         id: 1,
///         name: "Migrate billing".to_string(),
///         description: None,
///         performers: None,
///         status: TaskStatus::InProgress,
///         planned_effort: 8.0,
///         actual_effort: 3.0,
///         parent_id: None,
///         created_at: Timestamp::now(),
///         completed_at: None,
///     },
///     total_subtasks: 4,
///     completed_subtasks: 1,
/// };
///
/// let output = Tasks(vec![summary]).to_string();
/// assert!(output.contains("## Migrate billing (ID: 1) (1/4)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tasks(pub Vec<TaskSummary>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&TaskSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskSummary> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = TaskSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = TaskSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a TaskSummary;
    type IntoIter = std::slice::Iter<'a, TaskSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}
