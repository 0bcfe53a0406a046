//! Core library for the Arbor hierarchical task tracker.
//!
//! Tasks form a tree: any task may have subtasks, and each task carries its
//! own planned and actual effort. This crate provides the data model, the
//! status lifecycle with its completion cascade, SQLite persistence and an
//! async [`Tracker`] facade used by the CLI and the MCP server.
//!
//! # Status Lifecycle
//!
//! ```text
//!              ┌────────────────────────────┐
//!              ▼                            │
//!   assigned ──▶ in_progress ──▶ completed ─┘ (reopen to assigned/in_progress)
//!                 ▲      │
//!                 │      ▼
//!                 └── paused
//! ```
//!
//! Completing a task completes every open subtask below it in the same
//! transaction. A task cannot complete while a direct subtask is still
//! assigned or in progress, and only tasks without subtasks can be deleted.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): implement [`std::fmt::Display`] directly
//! - **Display Wrappers** ([`display`]): contextual formatting for lists and
//!   operation results
//! - **Terminal Rendering**: Markdown output rendered by the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use arbor_core::{params::CreateTask, params::ListTasks, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("tasks.db"))
//!     .build()
//!     .await?;
//!
//! let release = tracker
//!     .create(&CreateTask {
//!         name: "Release 2.0".to_string(),
//!         planned_effort: Some(12.0),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{release}");
//!
//! let roots = tracker
//!     .list(&ListTasks {
//!         roots_only: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! for summary in &roots {
//!     println!("Task: {}", summary.task.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, EffortDuration, LocalDateTime, OperationStatus, Tasks, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    EffortUpdate, Efforts, StatusUpdate, Task, TaskDetails, TaskStatus, TaskSummary,
};
pub use params::{
    CreateTask, EffortValue, Id, ListTasks, UpdateActualEffort, UpdateStatus, UpdateTask,
};
pub use tracker::{Tracker, TrackerBuilder};
