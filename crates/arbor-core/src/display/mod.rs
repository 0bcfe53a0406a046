//! Display formatting for tasks and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes are wrapped in newtypes so each output
//! context gets its own framing. Everything renders as Markdown, which the
//! CLI passes through termimad and the MCP server hands back verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers for    │    │   Markdown      │
//! │ (Task, Details) │───▶│ lists & results │───▶│  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrapper for task lists ([`Tasks`])
//! - [`results`]: operation result types ([`CreateResult`],
//!   [`UpdateResult`], [`DeleteResult`])
//! - [`status`]: confirmation messages ([`OperationStatus`])
//! - [`datetime`]: timestamp formatting in the system zone
//! - [`effort`]: effort hours as hours and minutes
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use arbor_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::{Task, TaskStatus},
//! };
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: 1,
//!     name: "Write release notes".to_string(),
//!     description: None,
//!     performers: Some("carol".to_string()),
//!     status: TaskStatus::Assigned,
//!     planned_effort: 2.0,
//!     actual_effort: 0.0,
//!     parent_id: None,
//!     created_at: Timestamp::now(),
//!     completed_at: None,
//! };
//!
//! let output = CreateResult::new(task).to_string();
//! assert!(output.contains("Created task with ID: 1"));
//!
//! let status = OperationStatus::failure("Task with ID 9 not found".to_string());
//! assert!(status.to_string().starts_with("Error:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod effort;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Tasks;
pub use datetime::LocalDateTime;
pub use effort::EffortDuration;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
