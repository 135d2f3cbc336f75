//! MCP server implementation and lifecycle management.
//!
//! This module contains the main server handler. It owns the connection
//! provider for the invoice backend and exposes the invoice tools to both
//! transports:
//!
//! - STDIO goes through the rmcp `ToolRouter` (see `domains/tools/router.rs`)
//! - HTTP goes through the `ToolRegistry` dispatch table
//!
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::{self, Error};
use crate::domains::invoices::{ConnectionProvider, GrpcConnectionProvider};
use crate::domains::tools::{ToolRegistry, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Invoice gateway. Use get_all_invoices to list invoices, \
get_invoice_id to fetch one, and create_invoice / update_invoice / delete_invoice to modify them. \
Every result carries a next_suggestion hint.";

/// The main MCP server handler.
///
/// Cloning is cheap: everything is behind an `Arc` and immutable.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Static tool table used by the HTTP transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for the STDIO transport.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new server talking to the gRPC backend from `config.backend`.
    pub fn new(config: Config) -> error::Result<Self> {
        let provider = GrpcConnectionProvider::new(&config.backend)
            .map_err(|e| Error::config(format!("invoice backend: {}", e)))?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Create a server using a custom connection provider.
    pub fn with_provider(config: Config, provider: Arc<dyn ConnectionProvider>) -> Self {
        info!("Invoice tools bound to {}", provider.target());
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(provider.clone()),
            registry: Arc::new(ToolRegistry::new(provider)),
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

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools in registration order (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.registry.call_tool(name, arguments).await
    }

    /// Tool names in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.registry.tool_names()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
