//! `delete_invoice` tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::shape::{InvoiceOutput, NextSuggestion, parse_arguments, shape, to_call_result};
use crate::domains::invoices::{ConnectionProvider, requests::build_delete};
use crate::domains::tools::ToolError;

/// Parameters for deleting an invoice.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteInvoiceParams {
    /// Identifier of the invoice to delete.
    pub id: String,
}

/// Delete tool - removes an invoice and echoes its last known fields.
pub struct DeleteInvoiceTool;

impl DeleteInvoiceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_invoice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete an invoice by ID. Returns the deleted invoice.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(id = %params.id))]
    pub async fn execute(
        params: &DeleteInvoiceParams,
        provider: &dyn ConnectionProvider,
    ) -> Result<InvoiceOutput, ToolError> {
        let request = build_delete(&params.id)?;

        let mut backend = provider.acquire().await?;
        let record = backend
            .delete(request)
            .await
            .inspect_err(|e| warn!("Deleting invoice '{}' failed: {}", params.id, e))?;

        info!("Deleted invoice {}", record.id);
        Ok(shape(record, NextSuggestion::CreateNew))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: DeleteInvoiceParams = parse_arguments(arguments)?;
        let output = Self::execute(&params, provider.as_ref()).await?;
        super::shape::call_result_value(&output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeleteInvoiceParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<InvoiceOutput>().into()),
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
                let params: DeleteInvoiceParams =
                    parse_arguments(serde_json::Value::Object(args))?;
                let output = Self::execute(&params, provider.as_ref()).await?;
                Ok(to_call_result(&output)?)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::invoices::InvoiceError;
    use crate::domains::invoices::testing::MemoryProvider;

    fn params(id: &str) -> DeleteInvoiceParams {
        DeleteInvoiceParams { id: id.to_string() }
    }

    #[tokio::test]
    async fn test_delete_echoes_deleted_invoice() {
        let provider = MemoryProvider::new().with_invoices(&[("Acme Co", "open", "card", 150.0)]);
        let output = DeleteInvoiceTool::execute(&params("inv-1"), &provider).await.unwrap();

        assert_eq!(output.id, "inv-1");
        assert_eq!(output.name, "Acme Co");
        assert_eq!(output.amount, 150.0);
        assert_eq!(
            output.next_suggestion,
            "You can create a new invoice using create_invoice."
        );
    }

    #[tokio::test]
    async fn test_second_delete_surfaces_backend_not_found() {
        let provider = MemoryProvider::new().with_invoices(&[("Acme Co", "open", "card", 150.0)]);
        DeleteInvoiceTool::execute(&params("inv-1"), &provider).await.unwrap();

        let err = DeleteInvoiceTool::execute(&params("inv-1"), &provider)
            .await
            .unwrap_err();
        match err {
            ToolError::Invoice(InvoiceError::Backend { code, message }) => {
                assert_eq!(code, tonic::Code::NotFound);
                assert!(message.contains("inv-1"));
            }
            other => panic!("Expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_blank_id() {
        let provider = MemoryProvider::new();
        let err = DeleteInvoiceTool::execute(&params("  "), &provider)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert_eq!(provider.acquired(), 0);
    }
}
