//! High-level tracker API.
//!
//! [`Tracker`] is the entry point for the CLI and the MCP server. It owns only
//! the database path; every operation opens its own connection on a blocking
//! thread, so a `Tracker` is cheap to clone and share between tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (status/effort  │───▶│   (task_ops)    │───▶│   (via db/)     │
//! │   responses)    │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Boundary responses     Async facade          Transactions
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: creates [`Tracker`] instances and initializes the database
//! - [`task_ops`]: create, read, update and delete operations
//! - [`handlers`]: the status and effort operations that answer with
//!   `success`/`message` responses instead of errors
//!
//! # Examples
//!
//! ```rust
//! use arbor_core::{
//!     params::{CreateTask, Id, UpdateStatus},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some(dir.path().join("arbor.db")))
//!     .build()
//!     .await?;
//!
//! let task = tracker
//!     .create(&CreateTask {
//!         name: "Ship the beta".to_string(),
//!         planned_effort: Some(10.0),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Validation problems come back as unsuccessful responses
//! let response = tracker
//!     .update_status(&UpdateStatus {
//!         id: task.id,
//!         status: "completed".to_string(),
//!     })
//!     .await?;
//! assert!(!response.success);
//!
//! let efforts = tracker.efforts(&Id { id: task.id }).await?;
//! assert_eq!(efforts.total_planned_effort, 10.0);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
};

pub mod builder;
pub mod handlers;
pub mod task_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing tasks.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database backing this tracker.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Run `op` against a fresh connection on the blocking thread pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
