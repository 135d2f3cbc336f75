//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A static table of the available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::invoices::ConnectionProvider;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::definitions::{
    CreateInvoiceTool, DeleteInvoiceTool, GetAllInvoicesTool, GetInvoiceTool, UpdateInvoiceTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    provider: Arc<dyn ConnectionProvider>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given connection provider.
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetAllInvoicesTool::NAME,
            GetInvoiceTool::NAME,
            CreateInvoiceTool::NAME,
            UpdateInvoiceTool::NAME,
            DeleteInvoiceTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetAllInvoicesTool::to_tool(),
            GetInvoiceTool::to_tool(),
            CreateInvoiceTool::to_tool(),
            UpdateInvoiceTool::to_tool(),
            DeleteInvoiceTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let provider = self.provider.clone();
        match name {
            GetAllInvoicesTool::NAME => GetAllInvoicesTool::http_handler(arguments, provider).await,
            GetInvoiceTool::NAME => GetInvoiceTool::http_handler(arguments, provider).await,
            CreateInvoiceTool::NAME => CreateInvoiceTool::http_handler(arguments, provider).await,
            UpdateInvoiceTool::NAME => UpdateInvoiceTool::http_handler(arguments, provider).await,
            DeleteInvoiceTool::NAME => DeleteInvoiceTool::http_handler(arguments, provider).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::invoices::testing::MemoryProvider;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(MemoryProvider::new()))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(
            names,
            vec![
                "get_all_invoices",
                "get_invoice_id",
                "create_invoice",
                "update_invoice",
                "delete_invoice"
            ]
        );
    }

    #[test]
    fn test_tools_metadata_matches_names() {
        let registry = test_registry();
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_list() {
        let registry = test_registry();
        let result = registry
            .call_tool("get_all_invoices", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["structuredContent"]["count"], 0);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_create_then_get() {
        let registry = test_registry();
        registry
            .call_tool(
                "create_invoice",
                serde_json::json!({ "name": "Acme Co", "status": "open", "method": "card", "amount": 150.0 }),
            )
            .await
            .unwrap();

        let fetched = registry
            .call_tool("get_invoice_id", serde_json::json!({ "id": "inv-1" }))
            .await
            .unwrap();
        assert_eq!(fetched["structuredContent"]["name"], "Acme Co");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
