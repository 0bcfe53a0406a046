//! MCP tool handlers implementation

use arbor_core::{
    display::{CreateResult, DeleteResult, UpdateResult},
    params as core, Tracker,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::{to_mcp_error, tool_failure};

/// Transparent MCP wrapper for core parameter types.
///
/// Adds the `Deserialize` and `JsonSchema` implementations rmcp needs while
/// the core types stay free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateTask = McpParams<core::CreateTask>;
pub type ListTasks = McpParams<core::ListTasks>;
pub type UpdateTask = McpParams<core::UpdateTask>;
pub type UpdateStatus = McpParams<core::UpdateStatus>;
pub type UpdateActualEffort = McpParams<core::UpdateActualEffort>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Tracker,
}

impl McpHandlers {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    pub async fn create_task(&self, Parameters(params): Parameters<CreateTask>) -> McpResult {
        debug!("create_task: {params:?}");

        match self.tracker.create(params.as_ref()).await {
            Ok(task) => text_result(CreateResult::new(task).to_string()),
            Err(e) => tool_failure("Failed to create task", e),
        }
    }

    pub async fn list_tasks(&self, Parameters(params): Parameters<ListTasks>) -> McpResult {
        debug!("list_tasks: {params:?}");

        let inner_params = params.as_ref();
        let tasks = match self.tracker.list(inner_params).await {
            Ok(tasks) => tasks,
            Err(e) => return tool_failure("Failed to list tasks", e),
        };

        let title = match (inner_params.parent_id, inner_params.roots_only) {
            (Some(parent_id), _) => format!("Subtasks of task {parent_id}"),
            (None, true) => "Root Tasks".to_string(),
            (None, false) => "Tasks".to_string(),
        };
        text_result(format!("# {title}\n\n{tasks}"))
    }

    pub async fn show_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_task: {params:?}");

        let id = params.as_ref().id;
        match self.tracker.get(params.as_ref()).await {
            Ok(Some(details)) => text_result(details.to_string()),
            Ok(None) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Task with ID {id} not found"
            ))])),
            Err(e) => Err(to_mcp_error("Failed to get task", &e)),
        }
    }

    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {params:?}");

        match self.tracker.update(params.as_ref()).await {
            Ok(details) => text_result(UpdateResult::new(details).to_string()),
            Err(e) => tool_failure("Failed to update task", e),
        }
    }

    pub async fn update_task_status(
        &self,
        Parameters(params): Parameters<UpdateStatus>,
    ) -> McpResult {
        debug!("update_task_status: {params:?}");

        let response = self
            .tracker
            .update_status(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update task status", &e))?;

        let json = serde_json::to_string(&response)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode response: {e}"), None))?;
        text_result(json)
    }

    pub async fn update_actual_effort(
        &self,
        Parameters(params): Parameters<UpdateActualEffort>,
    ) -> McpResult {
        debug!("update_actual_effort: {params:?}");

        let response = self
            .tracker
            .update_actual_effort(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update actual effort", &e))?;

        let json = serde_json::to_string(&response)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode response: {e}"), None))?;
        text_result(json)
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_task: {params:?}");

        match self.tracker.delete(params.as_ref()).await {
            Ok(task) => text_result(DeleteResult::new(task).to_string()),
            Err(e) => tool_failure("Failed to delete task", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use arbor_core::TrackerBuilder;
    use rmcp::model::RawContent;
    use tempfile::TempDir;

    use super::*;

    async fn create_test_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .expect("Failed to create tracker");
        (temp_dir, McpHandlers::new(tracker))
    }

    fn params<P: serde::de::DeserializeOwned>(value: serde_json::Value) -> Parameters<P> {
        Parameters(serde_json::from_value(value).expect("Invalid test parameters"))
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(text) => Some(text.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_create_and_show_task() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let created = handlers
            .create_task(params(serde_json::json!({
                "name": "Prepare demo",
                "planned_effort": 3.0
            })))
            .await
            .expect("create_task failed");
        assert!(text_of(&created).contains("Created task with ID: 1"));

        let shown = handlers
            .show_task(params(serde_json::json!({ "id": 1 })))
            .await
            .expect("show_task failed");
        assert!(text_of(&shown).contains("# 1. Prepare demo"));

        let missing = handlers
            .show_task(params(serde_json::json!({ "id": 2 })))
            .await
            .expect("show_task failed");
        assert_eq!(missing.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_status_tool_returns_json_response() {
        let (_temp_dir, handlers) = create_test_handlers().await;
        handlers
            .create_task(params(serde_json::json!({ "name": "Prepare demo" })))
            .await
            .expect("create_task failed");

        let result = handlers
            .update_task_status(params(serde_json::json!({ "id": 1, "status": "completed" })))
            .await
            .expect("update_task_status failed");

        let response: serde_json::Value =
            serde_json::from_str(&text_of(&result)).expect("Response should be JSON");
        assert_eq!(response["success"], false);
        assert_eq!(
            response["message"],
            "Cannot complete a task that has not been started"
        );
        assert_eq!(response["status"], "assigned");
    }

    #[tokio::test]
    async fn test_effort_tool_accepts_text_values() {
        let (_temp_dir, handlers) = create_test_handlers().await;
        handlers
            .create_task(params(serde_json::json!({ "name": "Prepare demo" })))
            .await
            .expect("create_task failed");

        let result = handlers
            .update_actual_effort(params(serde_json::json!({ "id": 1, "actual_effort": "4.5" })))
            .await
            .expect("update_actual_effort failed");

        let response: serde_json::Value =
            serde_json::from_str(&text_of(&result)).expect("Response should be JSON");
        assert_eq!(response["success"], true);
        assert_eq!(response["actual_effort"], 4.5);
    }

    #[tokio::test]
    async fn test_delete_non_terminal_is_tool_error() {
        let (_temp_dir, handlers) = create_test_handlers().await;
        handlers
            .create_task(params(serde_json::json!({ "name": "Parent" })))
            .await
            .expect("create_task failed");
        handlers
            .create_task(params(serde_json::json!({ "name": "Child", "parent_id": 1 })))
            .await
            .expect("create_task failed");

        let result = handlers
            .delete_task(params(serde_json::json!({ "id": 1 })))
            .await
            .expect("delete_task failed");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Task 1 has subtasks and cannot be deleted");
    }
}
