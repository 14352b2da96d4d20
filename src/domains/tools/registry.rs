//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch of tool calls to the matching definition
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::{GetStatsParams, GetStatsTool};
use super::error::ToolError;
use crate::domains::pokedex::Pokedex;

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for listing all available tools and
/// dispatching tool calls against the shared Pokedex.
pub struct ToolRegistry {
    dex: Arc<Pokedex>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given Pokedex.
    pub fn new(dex: Arc<Pokedex>) -> Self {
        Self { dex }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![GetStatsTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GetStatsTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate definition.
    ///
    /// An unrecognized name fails with [`ToolError::NotFound`] carrying that
    /// name; malformed arguments fail with [`ToolError::InvalidArguments`].
    pub fn call_tool(&self, name: &str, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        match name {
            GetStatsTool::NAME => {
                let params: GetStatsParams =
                    serde_json::from_value(serde_json::Value::Object(arguments))
                        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
                GetStatsTool::execute(&self.dex, &params)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
