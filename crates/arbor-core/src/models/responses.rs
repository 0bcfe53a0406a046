//! Structured success/failure responses for UI callers.
//!
//! These are the shapes handed back to asynchronous front ends, serialized as
//! `{"success": bool, "message": string, ...}`.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// Outcome of a status change request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdate {
    pub success: bool,
    pub message: String,
    /// Status the task holds after the request (unchanged on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl StatusUpdate {
    pub fn success(message: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            success: true,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn failure(message: impl Into<String>, status: Option<TaskStatus>) -> Self {
        Self {
            success: false,
            message: message.into(),
            status,
        }
    }
}

/// Outcome of an actual effort update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffortUpdate {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_effort: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_actual_effort: Option<f64>,
}

impl EffortUpdate {
    pub fn success(message: impl Into<String>, actual_effort: f64, total_actual_effort: f64) -> Self {
        Self {
            success: true,
            message: message.into(),
            actual_effort: Some(actual_effort),
            total_actual_effort: Some(total_actual_effort),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            actual_effort: None,
            total_actual_effort: None,
        }
    }
}
