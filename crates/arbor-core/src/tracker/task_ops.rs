//! Task operations for the Tracker.

use super::Tracker;
use crate::{
    display::Tasks,
    error::{Result, TrackerError},
    models::{Efforts, Task, TaskDetails},
    params::{CreateTask, Id, ListTasks, UpdateTask},
};

impl Tracker {
    /// Creates a task.
    ///
    /// Name, status and efforts are validated before the database is touched.
    pub async fn create(&self, params: &CreateTask) -> Result<Task> {
        let new_task = params.validate()?;
        self.with_database(move |db| db.create_task(&new_task))
            .await
    }

    /// Retrieves a task with its direct subtasks.
    pub async fn get(&self, params: &Id) -> Result<Option<TaskDetails>> {
        let id = params.id;
        self.with_database(move |db| db.get_task_details(id)).await
    }

    /// Lists tasks with their subtask counts, oldest first.
    pub async fn list(&self, params: &ListTasks) -> Result<Tasks> {
        let filter = params.validate()?;
        let summaries = self
            .with_database(move |db| db.list_tasks(&filter))
            .await?;
        Ok(Tasks(summaries))
    }

    /// Applies field changes to a task and saves it.
    ///
    /// Status changes go through the transition rules; completing a task
    /// cascades to its open subtasks.
    pub async fn update(&self, params: &UpdateTask) -> Result<TaskDetails> {
        let id = params.id;
        let changes = params.validate()?;
        self.with_database(move |db| db.update_task(id, changes))
            .await
    }

    /// Deletes a terminal task.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HasSubtasks` if the task still has subtasks.
    pub async fn delete(&self, params: &Id) -> Result<Task> {
        let id = params.id;
        self.with_database(move |db| db.delete_task(id)).await
    }

    /// Effort figures for a task and its direct subtasks.
    pub async fn efforts(&self, params: &Id) -> Result<Efforts> {
        let id = params.id;
        self.get(params)
            .await?
            .map(|details| details.calculate_efforts())
            .ok_or(TrackerError::TaskNotFound { id })
    }
}
