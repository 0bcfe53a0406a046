//! Command-line handling
//!
//! Each command has a clap argument struct that converts into the matching
//! core parameter type, keeping clap derives out of `arbor-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] runs the converted requests against the tracker and renders the
//! Markdown output through the terminal renderer.

use anyhow::{bail, Context, Result};
use arbor_core::{
    display::{CreateResult, DeleteResult, EffortDuration, OperationStatus, UpdateResult},
    params::*,
    Tracker,
};
use clap::{Args, ValueEnum};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Create a new task
#[derive(Args)]
pub struct CreateTaskArgs {
    /// Name of the task
    pub name: String,
    #[arg(short, long, help = "Free-form description of the task")]
    pub description: Option<String>,
    #[arg(short, long, help = "People working on the task, e.g. 'alice, bob'")]
    pub performers: Option<String>,
    #[arg(long, help = "Planned effort for the task itself")]
    pub planned: Option<f64>,
    #[arg(long, help = "Actual effort already spent on the task itself")]
    pub actual: Option<f64>,
    #[arg(long, help = "Create the task as a subtask of this task")]
    pub parent: Option<u64>,
    #[arg(long, help = "Initial status (defaults to assigned)")]
    pub status: Option<StatusArg>,
}

impl From<CreateTaskArgs> for CreateTask {
    fn from(val: CreateTaskArgs) -> Self {
        CreateTask {
            name: val.name,
            description: val.description,
            performers: val.performers,
            status: val.status.map(|s| s.to_string()),
            planned_effort: val.planned,
            actual_effort: val.actual,
            parent_id: val.parent,
        }
    }
}

/// List tasks
///
/// Without filters every task is listed. Each entry shows how many of its
/// direct subtasks are completed.
#[derive(Args)]
pub struct ListTasksArgs {
    #[arg(long, conflicts_with = "roots", help = "Only list subtasks of this task")]
    pub parent: Option<u64>,
    #[arg(long, help = "Only list tasks without a parent")]
    pub roots: bool,
    #[arg(long, help = "Only list tasks in this status")]
    pub status: Option<StatusArg>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            parent_id: val.parent,
            roots_only: val.roots,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Show details of a specific task
#[derive(Args)]
pub struct ShowTaskArgs {
    #[arg(help = "Unique identifier of the task to show")]
    pub id: u64,
}

impl From<ShowTaskArgs> for Id {
    fn from(val: ShowTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a task
///
/// Only the given fields change. An empty description or performers value
/// clears the field. Status changes follow the same rules as `status`.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "Unique identifier of the task to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(short, long, help = "New performers")]
    pub performers: Option<String>,
    #[arg(short, long, help = "New status")]
    pub status: Option<StatusArg>,
    #[arg(long, help = "New planned effort for the task itself")]
    pub planned: Option<f64>,
    #[arg(long, help = "New actual effort for the task itself")]
    pub actual: Option<f64>,
    #[arg(long, conflicts_with = "detach", help = "Move the task under this task")]
    pub parent: Option<u64>,
    #[arg(long, help = "Move the task to the root level")]
    pub detach: bool,
}

impl UpdateTaskArgs {
    /// Human-readable list of the requested changes.
    fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to '{name}'"));
        }
        if let Some(description) = &self.description {
            changes.push(if description.trim().is_empty() {
                "Cleared description".to_string()
            } else {
                "Updated description".to_string()
            });
        }
        if let Some(performers) = &self.performers {
            changes.push(if performers.trim().is_empty() {
                "Cleared performers".to_string()
            } else {
                format!("Performers set to {performers}")
            });
        }
        if let Some(status) = self.status {
            changes.push(format!("Status set to {status}"));
        }
        if let Some(planned) = self.planned {
            changes.push(format!("Planned effort set to {planned}"));
        }
        if let Some(actual) = self.actual {
            changes.push(format!("Actual effort set to {actual}"));
        }
        if let Some(parent) = self.parent {
            changes.push(format!("Moved under task {parent}"));
        }
        if self.detach {
            changes.push("Moved to the root level".to_string());
        }
        changes
    }
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            name: val.name,
            description: val.description,
            performers: val.performers,
            status: val.status.map(|s| s.to_string()),
            planned_effort: val.planned,
            actual_effort: val.actual,
            parent_id: val.parent,
            detach: val.detach,
        }
    }
}

/// Change the status of a task
///
/// `completed` and `paused` are only reachable from `in_progress`. Completing
/// a task also completes its open subtasks, unless one of its direct subtasks
/// is still assigned or in progress.
#[derive(Args)]
pub struct SetStatusArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
    #[arg(help = "New status")]
    pub status: StatusArg,
    #[arg(long, help = "Print the structured JSON response")]
    pub json: bool,
}

impl From<&SetStatusArgs> for UpdateStatus {
    fn from(val: &SetStatusArgs) -> Self {
        UpdateStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Record the actual effort of a task
#[derive(Args)]
pub struct SetEffortArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
    #[arg(help = "Actual effort spent on the task itself", allow_hyphen_values = true)]
    pub value: String,
    #[arg(long, help = "Print the structured JSON response")]
    pub json: bool,
}

impl From<&SetEffortArgs> for UpdateActualEffort {
    fn from(val: &SetEffortArgs) -> Self {
        UpdateActualEffort {
            id: val.id,
            actual_effort: Some(EffortValue::Text(val.value.clone())),
        }
    }
}

/// Delete a task
///
/// Only tasks without subtasks can be deleted.
#[derive(Args)]
pub struct DeleteTaskArgs {
    #[arg(help = "Unique identifier of the task to delete")]
    pub id: u64,
}

impl From<DeleteTaskArgs> for Id {
    fn from(val: DeleteTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Command-line representation of task statuses
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Handed out, not started
    Assigned,
    /// Being worked on
    #[value(aliases = ["in_progress", "inprogress"])]
    InProgress,
    /// On hold
    Paused,
    /// Finished
    Completed,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusArg::Assigned => write!(f, "assigned"),
            StatusArg::InProgress => write!(f, "in_progress"),
            StatusArg::Paused => write!(f, "paused"),
            StatusArg::Completed => write!(f, "completed"),
        }
    }
}

/// Runs CLI commands against a tracker.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Dispatch a task command. `serve` is handled by the caller.
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Create(args) => self.create_task(args).await,
            Commands::List(args) => self.list_tasks(&args.into()).await,
            Commands::Show(args) => self.show_task(&args.into()).await,
            Commands::Update(args) => self.update_task(args).await,
            Commands::Status(args) => self.set_status(&args).await,
            Commands::Effort(args) => self.set_effort(&args).await,
            Commands::Delete(args) => self.delete_task(&args.into()).await,
            Commands::Serve => bail!("The serve command is not a task command"),
        }
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<()> {
        let task = self
            .tracker
            .create(&args.into())
            .await
            .context("Failed to create task")?;

        self.renderer.render(&CreateResult::new(task).to_string());
        Ok(())
    }

    pub async fn list_tasks(&self, params: &ListTasks) -> Result<()> {
        let tasks = self
            .tracker
            .list(params)
            .await
            .context("Failed to list tasks")?;

        let title = match (params.parent_id, params.roots_only) {
            (Some(parent_id), _) => format!("Subtasks of task {parent_id}"),
            (None, true) => "Root Tasks".to_string(),
            (None, false) => "Tasks".to_string(),
        };

        self.renderer.render(&format!("# {title}\n\n{tasks}"));
        Ok(())
    }

    async fn show_task(&self, params: &Id) -> Result<()> {
        let Some(details) = self
            .tracker
            .get(params)
            .await
            .context("Failed to get task")?
        else {
            bail!("Task with ID {} not found", params.id);
        };

        self.renderer.render(&details.to_string());
        Ok(())
    }

    async fn update_task(&self, args: UpdateTaskArgs) -> Result<()> {
        let changes = args.describe_changes();
        let details = self
            .tracker
            .update(&args.into())
            .await
            .context("Failed to update task")?;

        self.renderer
            .render(&UpdateResult::with_changes(details, changes).to_string());
        Ok(())
    }

    async fn set_status(&self, args: &SetStatusArgs) -> Result<()> {
        let response = self
            .tracker
            .update_status(&args.into())
            .await
            .context("Failed to update task status")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Ok(());
        }
        if !response.success {
            bail!(response.message);
        }

        self.renderer
            .render(&OperationStatus::from(&response).to_string());
        Ok(())
    }

    async fn set_effort(&self, args: &SetEffortArgs) -> Result<()> {
        let response = self
            .tracker
            .update_actual_effort(&args.into())
            .await
            .context("Failed to update actual effort")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Ok(());
        }
        if !response.success {
            bail!(response.message);
        }

        let mut output = OperationStatus::from(&response).to_string();
        if let Some(total) = response.total_actual_effort {
            output.push_str(&format!(
                "\nTotal actual effort including subtasks: {}\n",
                EffortDuration(total)
            ));
        }
        self.renderer.render(&output);
        Ok(())
    }

    async fn delete_task(&self, params: &Id) -> Result<()> {
        let task = self
            .tracker
            .delete(params)
            .await
            .context("Failed to delete task")?;

        self.renderer.render(&DeleteResult::new(task).to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_arg_matches_core_strings() {
        for (arg, status) in [
            (StatusArg::Assigned, arbor_core::TaskStatus::Assigned),
            (StatusArg::InProgress, arbor_core::TaskStatus::InProgress),
            (StatusArg::Paused, arbor_core::TaskStatus::Paused),
            (StatusArg::Completed, arbor_core::TaskStatus::Completed),
        ] {
            assert_eq!(arg.to_string(), status.as_str());
        }
    }

    #[test]
    fn test_update_args_conversion_and_changes() {
        let args = UpdateTaskArgs {
            id: 4,
            name: Some("Renamed".to_string()),
            description: Some(String::new()),
            performers: None,
            status: Some(StatusArg::InProgress),
            planned: None,
            actual: Some(1.5),
            parent: None,
            detach: true,
        };

        assert_eq!(
            args.describe_changes(),
            vec![
                "Renamed to 'Renamed'",
                "Cleared description",
                "Status set to in_progress",
                "Actual effort set to 1.5",
                "Moved to the root level",
            ]
        );

        let params: UpdateTask = args.into();
        assert_eq!(params.status.as_deref(), Some("in_progress"));
        assert!(params.detach);
        assert!(params.validate().is_ok());
    }
}
