//! Error handling utilities for the MCP server

use arbor_core::TrackerError;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};

use super::handlers::McpResult;

/// Convert a tracker error into an MCP protocol error.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Report a failed tool call.
///
/// Problems with the request itself (validation, missing tasks) become a
/// tool result flagged as an error so the model can read the message and
/// correct itself. Everything else is a protocol-level internal error.
pub fn tool_failure(message: &str, error: TrackerError) -> McpResult {
    if error.is_validation() || error.is_not_found() {
        Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
    } else {
        Err(to_mcp_error(message, &error))
    }
}
