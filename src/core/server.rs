//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services: resource requests go
//! to the ResourceService, tool requests to the ToolRegistry. Each call is
//! independent and stateless; the only shared state is the read-only Pokedex
//! built at startup.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::pokedex::Pokedex;
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct PokedexServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Registry for listing and dispatching tool calls.
    tool_registry: Arc<ToolRegistry>,
}

impl PokedexServer {
    /// Create a new MCP server over the built-in Pokedex.
    pub fn new(config: Config) -> Self {
        Self::with_dex(config, Arc::new(Pokedex::builtin()))
    }

    /// Create a new MCP server over an injected Pokedex.
    ///
    /// This is the seam used by tests to substitute their own mapping.
    pub fn with_dex(config: Config, dex: Arc<Pokedex>) -> Self {
        let config = Arc::new(config);

        let resource_service = Arc::new(ResourceService::new(dex.clone()));
        let tool_registry = Arc::new(ToolRegistry::new(dex));

        Self {
            config,
            resource_service,
            tool_registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

impl ServerHandler for PokedexServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes Pokedex records. Each Pokemon is readable as a \
                 pokemon:// resource, and the get_stats tool returns its base stats."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match &e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                ResourceError::Serialization(_) => McpError::internal_error(e.to_string(), None),
            })
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        self.tool_registry
            .call_tool(&request.name, arguments)
            .map_err(|e| match &e {
                ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                    McpError::invalid_params(e.to_string(), None)
                }
                ToolError::Serialization(_) => McpError::internal_error(e.to_string(), None),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_reports_config_metadata() {
        let server = PokedexServer::new(Config::default());
        assert_eq!(server.name(), "pokedex-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_get_info_advertises_capabilities() {
        let server = PokedexServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn test_services_share_the_injected_dex() {
        let dex = Arc::new(Pokedex::builtin());
        let server = PokedexServer::with_dex(Config::default(), dex);

        let resources = server.resource_service.list_resources().await;
        assert_eq!(resources.len(), 1);

        let names = server.tool_registry.tool_names();
        assert_eq!(names, vec!["get_stats"]);
    }
}
