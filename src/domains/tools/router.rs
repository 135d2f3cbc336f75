//! Tool Router - builds the rmcp ToolRouter for the STDIO transport.
//!
//! Each tool knows how to create its own route; this module just lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::invoices::ConnectionProvider;

use super::definitions::{
    CreateInvoiceTool, DeleteInvoiceTool, GetAllInvoicesTool, GetInvoiceTool, UpdateInvoiceTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(provider: Arc<dyn ConnectionProvider>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetAllInvoicesTool::create_route(provider.clone()))
        .with_route(GetInvoiceTool::create_route(provider.clone()))
        .with_route(CreateInvoiceTool::create_route(provider.clone()))
        .with_route(UpdateInvoiceTool::create_route(provider.clone()))
        .with_route(DeleteInvoiceTool::create_route(provider))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::invoices::testing::MemoryProvider;

    struct TestServer {}

    fn test_provider() -> Arc<dyn ConnectionProvider> {
        Arc::new(MemoryProvider::new())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_provider());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_all_invoices"));
        assert!(names.contains(&"get_invoice_id"));
        assert!(names.contains(&"create_invoice"));
        assert!(names.contains(&"update_invoice"));
        assert!(names.contains(&"delete_invoice"));
    }

    #[test]
    fn test_registry_matches_router() {
        let provider = test_provider();
        let registry = ToolRegistry::new(provider.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(provider);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
