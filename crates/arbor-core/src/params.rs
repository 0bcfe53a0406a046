//! Parameter structures for tracker operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. Interface layers wrap them with
//! their own argument types and convert with `From`/`.into()`; JSON schema
//! generation is available behind the `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! String-typed fields (statuses, effort values typed by a person) are parsed
//! by each structure's `validate()` method, which returns
//! [`TrackerError::InvalidInput`] on malformed input.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{NewTask, TaskChanges, TaskFilter, TaskStatus},
};

const STATUS_HINT: &str = "Must be 'assigned', 'in_progress', 'paused', or 'completed'";

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_task and delete_task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the task to operate on
    pub id: u64,
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTask {
    /// Name of the task (required, non-empty)
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Optional informal list of assignees
    pub performers: Option<String>,
    /// Initial status; defaults to 'assigned'
    pub status: Option<String>,
    /// Planned effort for the task itself; defaults to 0
    pub planned_effort: Option<f64>,
    /// Actual effort already spent; defaults to 0
    pub actual_effort: Option<f64>,
    /// ID of the parent task when creating a subtask
    pub parent_id: Option<u64>,
}

impl CreateTask {
    /// Validate creation parameters and return the typed request.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor_core::{models::TaskStatus, params::CreateTask};
    ///
    /// let params = CreateTask {
    ///     name: "Write docs".to_string(),
    ///     ..Default::default()
    /// };
    /// let task = params.validate()?;
    /// assert_eq!(task.status, TaskStatus::Assigned);
    /// assert_eq!(task.planned_effort, 0.0);
    ///
    /// let blank = CreateTask::default();
    /// assert!(blank.validate().is_err());
    /// # use arbor_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<NewTask> {
        Ok(NewTask {
            name: validate_name(&self.name)?,
            description: self.description.clone(),
            performers: self.performers.clone(),
            status: self
                .status
                .as_deref()
                .map(parse_status)
                .transpose()?
                .unwrap_or_default(),
            planned_effort: validate_effort("planned_effort", self.planned_effort.unwrap_or(0.0))?,
            actual_effort: validate_effort("actual_effort", self.actual_effort.unwrap_or(0.0))?,
            parent_id: self.parent_id,
        })
    }
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    /// Only list direct subtasks of this task
    pub parent_id: Option<u64>,
    /// Only list root tasks (tasks without a parent)
    #[serde(default)]
    pub roots_only: bool,
    /// Only list tasks in this status
    pub status: Option<String>,
}

impl ListTasks {
    /// Parse the listing options into a typed filter.
    pub fn validate(&self) -> Result<TaskFilter> {
        if self.roots_only && self.parent_id.is_some() {
            return Err(TrackerError::invalid_input(
                "roots_only",
                "Cannot combine roots_only with a parent_id filter",
            ));
        }
        Ok(TaskFilter {
            parent_id: self.parent_id,
            roots_only: self.roots_only,
            status: self.status.as_deref().map(parse_status).transpose()?,
        })
    }
}

/// Parameters for updating an existing task.
///
/// Every field except `id` is optional; absent fields keep their current
/// value. Status changes go through the task lifecycle rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    /// Updated name
    pub name: Option<String>,
    /// Updated description (empty string clears it)
    pub description: Option<String>,
    /// Updated performers (empty string clears them)
    pub performers: Option<String>,
    /// New status ('assigned', 'in_progress', 'paused', or 'completed')
    pub status: Option<String>,
    /// Updated planned effort of the task itself
    pub planned_effort: Option<f64>,
    /// Updated actual effort of the task itself
    pub actual_effort: Option<f64>,
    /// Move the task under this parent
    pub parent_id: Option<u64>,
    /// Move the task to the root level
    #[serde(default)]
    pub detach: bool,
}

impl UpdateTask {
    /// Validate update parameters and return the typed change set.
    pub fn validate(&self) -> Result<TaskChanges> {
        if self.detach && self.parent_id.is_some() {
            return Err(TrackerError::invalid_input(
                "parent_id",
                "Cannot set a parent and detach in the same update",
            ));
        }

        let parent_id = if self.detach {
            Some(None)
        } else {
            self.parent_id.map(Some)
        };

        Ok(TaskChanges {
            name: self.name.as_deref().map(validate_name).transpose()?,
            description: self.description.clone(),
            performers: self.performers.clone(),
            status: self.status.as_deref().map(parse_status).transpose()?,
            planned_effort: self
                .planned_effort
                .map(|v| validate_effort("planned_effort", v))
                .transpose()?,
            actual_effort: self
                .actual_effort
                .map(|v| validate_effort("actual_effort", v))
                .transpose()?,
            parent_id,
        })
    }
}

/// Parameters for changing only the status of a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateStatus {
    /// Task ID to update
    pub id: u64,
    /// New status ('assigned', 'in_progress', 'paused', or 'completed')
    pub status: String,
}

impl UpdateStatus {
    /// Parse the requested status.
    pub fn validate(&self) -> Result<TaskStatus> {
        parse_status(&self.status)
    }
}

/// An effort value as typed by a person or sent by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum EffortValue {
    Number(f64),
    Text(String),
}

impl From<f64> for EffortValue {
    fn from(value: f64) -> Self {
        EffortValue::Number(value)
    }
}

impl From<&str> for EffortValue {
    fn from(value: &str) -> Self {
        EffortValue::Text(value.to_string())
    }
}

/// Parameters for recording the actual effort of a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateActualEffort {
    /// Task ID to update
    pub id: u64,
    /// New actual effort (number or numeric string, required)
    pub actual_effort: Option<EffortValue>,
}

impl UpdateActualEffort {
    /// Parse and check the effort value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor_core::params::UpdateActualEffort;
    ///
    /// let params = UpdateActualEffort { id: 1, actual_effort: Some("2.5".into()) };
    /// assert_eq!(params.validate()?, 2.5);
    ///
    /// let missing = UpdateActualEffort { id: 1, actual_effort: None };
    /// assert!(missing.validate().is_err());
    ///
    /// let garbage = UpdateActualEffort { id: 1, actual_effort: Some("soon".into()) };
    /// assert!(garbage.validate().is_err());
    /// # use arbor_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<f64> {
        let value = match &self.actual_effort {
            None => {
                return Err(TrackerError::invalid_input(
                    "actual_effort",
                    "A value for actual effort is required",
                ));
            }
            Some(EffortValue::Number(value)) => *value,
            Some(EffortValue::Text(text)) => text.trim().parse::<f64>().map_err(|_| {
                TrackerError::invalid_input(
                    "actual_effort",
                    format!("'{text}' is not a number"),
                )
            })?,
        };
        validate_effort("actual_effort", value)
    }
}

fn parse_status(value: &str) -> Result<TaskStatus> {
    TaskStatus::from_str(value).map_err(|_| {
        TrackerError::invalid_input("status", format!("Invalid status: {value}. {STATUS_HINT}"))
    })
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_input("name", "Task name is required"));
    }
    Ok(trimmed.to_string())
}

fn validate_effort(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(TrackerError::invalid_input(field, "Effort must be a finite number"));
    }
    if value < 0.0 {
        return Err(TrackerError::invalid_input(field, "Effort cannot be negative"));
    }
    Ok(value)
}
