//! `get_all_invoices` tool definition.
//!
//! Lists every invoice known to the backend.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::shape::{InvoiceListOutput, parse_arguments, shape_list, to_call_result};
use crate::domains::invoices::{ConnectionProvider, requests::build_get_all};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetAllInvoicesParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// List tool - returns every invoice.
pub struct GetAllInvoicesTool;

impl GetAllInvoicesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_all_invoices";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get all invoices from the invoice service. Returns the invoices, their count and a suggested next call.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        _params: &GetAllInvoicesParams,
        provider: &dyn ConnectionProvider,
    ) -> Result<InvoiceListOutput, ToolError> {
        let request = build_get_all();

        let mut backend = provider.acquire().await?;
        let invoices = backend
            .list_all(request)
            .await
            .inspect_err(|e| warn!("Listing invoices failed: {}", e))?;

        info!("Fetched {} invoices", invoices.len());
        Ok(shape_list(invoices))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetAllInvoicesParams = parse_arguments(arguments)?;
        let output = Self::execute(&params, provider.as_ref()).await?;
        super::shape::call_result_value(&output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetAllInvoicesParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<InvoiceListOutput>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(provider: Arc<dyn ConnectionProvider>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let provider = provider.clone();
            async move {
                let params: GetAllInvoicesParams =
                    parse_arguments(serde_json::Value::Object(args))?;
                let output = Self::execute(&params, provider.as_ref()).await?;
                Ok(to_call_result(&output)?)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::invoices::InvoiceError;
    use crate::domains::invoices::testing::MemoryProvider;

    #[tokio::test]
    async fn test_list_empty_backend() {
        let provider = MemoryProvider::new();
        let output = GetAllInvoicesTool::execute(&GetAllInvoicesParams::default(), &provider)
            .await
            .unwrap();

        assert!(output.invoices.is_empty());
        assert_eq!(output.count, 0);
        assert_eq!(
            output.next_suggestion,
            "Try fetching a specific invoice by ID using get_invoice_id(id='your_invoice_id')."
        );
    }

    #[tokio::test]
    async fn test_list_counts_returned_invoices() {
        let provider = MemoryProvider::new().with_invoices(&[
            ("Acme Co", "open", "card", 150.0),
            ("Globex", "paid", "transfer", 99.99),
            ("Initech", "void", "cash", 0.0),
        ]);
        let output = GetAllInvoicesTool::execute(&GetAllInvoicesParams::default(), &provider)
            .await
            .unwrap();

        assert_eq!(output.count, 3);
        assert_eq!(output.invoices.len(), 3);
        assert_eq!(output.invoices[1].name, "Globex");
        assert_eq!(output.invoices[1].amount, 99.99);
    }

    #[tokio::test]
    async fn test_list_unreachable_backend_is_error_not_empty_list() {
        let provider = MemoryProvider::unreachable();
        let result =
            GetAllInvoicesTool::execute(&GetAllInvoicesParams::default(), &provider).await;

        assert!(matches!(
            result,
            Err(ToolError::Invoice(InvoiceError::Connection(_)))
        ));
    }

    #[tokio::test]
    async fn test_each_call_acquires_its_own_handle() {
        let provider = MemoryProvider::new();
        for _ in 0..3 {
            GetAllInvoicesTool::execute(&GetAllInvoicesParams::default(), &provider)
                .await
                .unwrap();
        }
        assert_eq!(provider.acquired(), 3);
    }

    #[test]
    fn test_tool_metadata() {
        let tool = GetAllInvoicesTool::to_tool();
        assert_eq!(tool.name, "get_all_invoices");
        assert!(tool.output_schema.is_some());
    }
}
