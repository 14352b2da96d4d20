//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params and execute()
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs` for listing and dispatch

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::ToolRegistry;
