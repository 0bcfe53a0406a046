//! MCP server implementation for Arbor
//!
//! Exposes the tracker as Model Context Protocol tools over stdio, so an
//! assistant can create, inspect and progress tasks.

use anyhow::Result;
use arbor_core::Tracker;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use std::future::Future;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CreateTask, Id, ListTasks, McpHandlers, McpResult, UpdateActualEffort, UpdateStatus,
    UpdateTask,
};

const INSTRUCTIONS: &str = r#"Arbor is a hierarchical task tracker. Every task may have subtasks, a status, performers, and planned and actual effort.

## Statuses
- assigned: handed out, not started (the default)
- in_progress: being worked on
- paused: on hold; only reachable from in_progress
- completed: finished; only reachable from in_progress

## Rules
- A task cannot be completed while any direct subtask is assigned or in_progress.
- Completing a task completes all of its paused subtasks, recursively.
- Only tasks without subtasks can be deleted.
- Effort totals add a task's own effort to that of its direct subtasks.

## Tools
- create_task, list_tasks, show_task, update_task, delete_task
- update_task_status and update_actual_effort answer with JSON {"success", "message", ...}; check "success" before assuming the change happened."#;

/// MCP server for Arbor
#[derive(Clone)]
pub struct ArborMcpServer {
    tracker: Tracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ArborMcpServer {
    /// Create a new Arbor MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "create_task",
        description = "Create a task. Requires a non-empty name. Optional: description, performers (free text such as 'alice, bob'), status (defaults to 'assigned'), planned_effort and actual_effort (non-negative numbers), and parent_id to create it as a subtask. Returns the new task with its ID."
    )]
    async fn create_task(&self, params: Parameters<CreateTask>) -> McpResult {
        self.handlers().create_task(params).await
    }

    #[tool(
        name = "list_tasks",
        description = "List tasks with their status, effort and subtask progress (completed/total). Filters: parent_id for the direct subtasks of one task, roots_only=true for top-level tasks, status for one status. roots_only cannot be combined with parent_id."
    )]
    async fn list_tasks(&self, params: Parameters<ListTasks>) -> McpResult {
        self.handlers().list_tasks(params).await
    }

    #[tool(
        name = "show_task",
        description = "Show one task in full: metadata, description, the effort table (own, subtasks, total) and its direct subtasks with their statuses."
    )]
    async fn show_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_task(params).await
    }

    #[tool(
        name = "update_task",
        description = "Update fields of a task by ID. Only provided fields change; an empty description or performers clears it. Use parent_id to move the task under another task or detach=true to make it a root task. A status change follows the same rules as update_task_status."
    )]
    async fn update_task(&self, params: Parameters<UpdateTask>) -> McpResult {
        self.handlers().update_task(params).await
    }

    #[tool(
        name = "update_task_status",
        description = "Change the status of a task ('assigned', 'in_progress', 'paused' or 'completed'). Returns JSON {success, message, status}. Refused changes (e.g. completing an assigned task, or completing while subtasks are still open) come back with success=false and the reason."
    )]
    async fn update_task_status(&self, params: Parameters<UpdateStatus>) -> McpResult {
        self.handlers().update_task_status(params).await
    }

    #[tool(
        name = "update_actual_effort",
        description = "Record the actual effort spent on a task itself. actual_effort may be a number or numeric string and must not be negative. Returns JSON {success, message, actual_effort, total_actual_effort}, where the total includes direct subtasks."
    )]
    async fn update_actual_effort(&self, params: Parameters<UpdateActualEffort>) -> McpResult {
        self.handlers().update_actual_effort(params).await
    }

    #[tool(
        name = "delete_task",
        description = "Permanently delete a task. Only tasks without subtasks can be deleted; delete the subtasks first."
    )]
    async fn delete_task(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_task(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ArborMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "arbor".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ArborMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Arbor MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use arbor_core::TrackerBuilder;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_router_exposes_all_tools() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .expect("Failed to create tracker");

        let server = ArborMcpServer::new(tracker);
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "create_task",
                "delete_task",
                "list_tasks",
                "show_task",
                "update_actual_effort",
                "update_task",
                "update_task_status",
            ]
        );
    }
}
