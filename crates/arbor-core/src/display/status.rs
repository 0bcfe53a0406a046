//! Confirmation messages for operations without a resource to show.

use std::fmt;

use crate::models::{EffortUpdate, StatusUpdate};

/// A one-line success or error message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&StatusUpdate> for OperationStatus {
    fn from(update: &StatusUpdate) -> Self {
        Self {
            message: update.message.clone(),
            success: update.success,
        }
    }
}

impl From<&EffortUpdate> for OperationStatus {
    fn from(update: &EffortUpdate) -> Self {
        Self {
            message: update.message.clone(),
            success: update.success,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Task 3 is now completed".to_string());
        assert_eq!(success.to_string(), "Success: Task 3 is now completed\n");

        let failure = OperationStatus::failure("Task with ID 3 not found".to_string());
        assert!(failure.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_from_boundary_responses() {
        let update = StatusUpdate::failure(
            "Cannot pause a task that is not yet in progress",
            Some(TaskStatus::Assigned),
        );
        let status = OperationStatus::from(&update);
        assert!(!status.success);
        assert_eq!(status.message, update.message);

        let effort = EffortUpdate::success("Actual effort updated", 2.0, 5.0);
        assert!(OperationStatus::from(&effort).success);
    }
}
