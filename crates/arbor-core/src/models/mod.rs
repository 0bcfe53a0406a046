//! Data models for tasks.
//!
//! This module contains the domain models of the tracker: the [`Task`] row,
//! its [`TaskStatus`], the [`TaskDetails`] view that pairs a task with its
//! direct subtasks, and the [`Efforts`] aggregation record. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use arbor_core::models::{Task, TaskDetails, TaskStatus};
//! use jiff::Timestamp;
//!
//! let parent = Task {
//!     id: 1,
//!     name: "Release 1.0".to_string(),
//!     description: None,
//!     performers: Some("alice, bob".to_string()),
//!     status: TaskStatus::InProgress,
//!     planned_effort: 4.0,
//!     actual_effort: 1.5,
//!     parent_id: None,
//!     created_at: Timestamp::now(),
//!     completed_at: None,
//! };
//! let details = TaskDetails::new(parent, vec![]);
//! assert!(details.is_terminal());
//! assert_eq!(details.total_planned_effort(), 4.0);
//! println!("{}", details); // Markdown with metadata and efforts
//! ```

pub mod efforts;
pub mod filters;
pub mod requests;
pub mod responses;
pub mod status;
pub mod summary;
pub mod task;


pub use efforts::Efforts;
pub use filters::TaskFilter;
pub use requests::{NewTask, TaskChanges};
pub use responses::{EffortUpdate, StatusUpdate};
pub use status::TaskStatus;
pub use summary::TaskSummary;
pub use task::{Task, TaskDetails};
