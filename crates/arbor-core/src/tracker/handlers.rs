//! Operations answering with structured success/failure responses.
//!
//! Validation failures and missing tasks become `success: false` responses
//! carrying a human-readable message. Anything else (database or runtime
//! trouble) is returned as an error for the caller to treat as fatal.

use log::info;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{EffortUpdate, StatusUpdate, TaskStatus},
    params::{Id, UpdateActualEffort, UpdateStatus},
};

/// Whether an error belongs in a failure response rather than an `Err`.
fn is_reportable(err: &TrackerError) -> bool {
    err.is_validation() || err.is_not_found()
}

impl Tracker {
    /// Changes the status of a task.
    ///
    /// Setting the status a task already has succeeds without touching it.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use arbor_core::{params::UpdateStatus, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let response = tracker
    ///     .update_status(&UpdateStatus { id: 1, status: "in_progress".to_string() })
    ///     .await?;
    /// println!("{}", serde_json::to_string(&response)?);
    /// # Result::<(), Box<dyn std::error::Error>>::Ok(())
    /// # };
    /// ```
    pub async fn update_status(&self, params: &UpdateStatus) -> Result<StatusUpdate> {
        let id = params.id;
        let status = match params.validate() {
            Ok(status) => status,
            Err(e) if is_reportable(&e) => {
                let current = self.current_status(id).await?;
                return Ok(StatusUpdate::failure(e.to_string(), current));
            }
            Err(e) => return Err(e),
        };

        match self
            .with_database(move |db| db.update_status(id, status))
            .await
        {
            Ok(details) => Ok(StatusUpdate::success(
                format!("Task {id} is now {}", details.task.status),
                details.task.status,
            )),
            Err(e) if is_reportable(&e) => {
                info!("Status update for task {id} refused: {e}");
                let current = self.current_status(id).await?;
                Ok(StatusUpdate::failure(e.to_string(), current))
            }
            Err(e) => Err(e),
        }
    }

    /// Records the actual effort of a task.
    ///
    /// The value may arrive as a number or as text; missing, non-numeric and
    /// negative values are refused.
    pub async fn update_actual_effort(&self, params: &UpdateActualEffort) -> Result<EffortUpdate> {
        let id = params.id;
        let value = match params.validate() {
            Ok(value) => value,
            Err(e) if is_reportable(&e) => return Ok(EffortUpdate::failure(e.to_string())),
            Err(e) => return Err(e),
        };

        match self
            .with_database(move |db| db.update_actual_effort(id, value))
            .await
        {
            Ok(details) => Ok(EffortUpdate::success(
                format!("Actual effort of task {id} set to {value}"),
                details.task.actual_effort,
                details.total_actual_effort(),
            )),
            Err(e) if is_reportable(&e) => {
                info!("Effort update for task {id} refused: {e}");
                Ok(EffortUpdate::failure(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn current_status(&self, id: u64) -> Result<Option<TaskStatus>> {
        Ok(self.get(&Id { id }).await?.map(|details| details.task.status))
    }
}
