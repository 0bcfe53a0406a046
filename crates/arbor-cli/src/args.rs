use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CreateTaskArgs, DeleteTaskArgs, ListTasksArgs, SetEffortArgs, SetStatusArgs, ShowTaskArgs,
    UpdateTaskArgs,
};

/// Hierarchical task tracker
///
/// Arbor keeps a tree of tasks, each with a status, performers and planned
/// and actual effort. Completing a task completes every open subtask below
/// it. Run without a command to list the root tasks, or use `serve` to expose
/// the tracker as an MCP tool server.
#[derive(Parser)]
#[command(version, about, name = "arbor")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/arbor/arbor.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Arbor CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create a task or subtask
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// List tasks with their subtask progress
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show a task with its efforts and subtasks
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Update the fields of a task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Change the status of a task
    #[command(alias = "st")]
    Status(SetStatusArgs),
    /// Record the actual effort spent on a task
    #[command(alias = "e")]
    Effort(SetEffortArgs),
    /// Delete a task without subtasks
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Start the MCP server
    Serve,
}
