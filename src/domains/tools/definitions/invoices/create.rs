//! `create_invoice` tool definition.

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
use crate::domains::invoices::{ConnectionProvider, requests::build_create};
use crate::domains::tools::ToolError;

/// Parameters for creating an invoice. All fields are required.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateInvoiceParams {
    /// Invoice name (customer or description).
    pub name: String,

    /// Invoice status, e.g. "open" or "paid".
    pub status: String,

    /// Payment method, e.g. "card" or "transfer".
    pub method: String,

    /// Invoice amount.
    pub amount: f64,
}

/// Create tool - creates a new invoice.
pub struct CreateInvoiceTool;

impl CreateInvoiceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_invoice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new invoice in the invoice service. The backend assigns the invoice ID.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(
        params: &CreateInvoiceParams,
        provider: &dyn ConnectionProvider,
    ) -> Result<InvoiceOutput, ToolError> {
        let request = build_create(&params.name, &params.status, &params.method, params.amount);

        let mut backend = provider.acquire().await?;
        let record = backend
            .create(request)
            .await
            .inspect_err(|e| warn!("Creating invoice '{}' failed: {}", params.name, e))?;

        info!("Created invoice {}", record.id);
        Ok(shape(record, NextSuggestion::Created))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: CreateInvoiceParams = parse_arguments(arguments)?;
        let output = Self::execute(&params, provider.as_ref()).await?;
        super::shape::call_result_value(&output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateInvoiceParams>().into(),
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
                let params: CreateInvoiceParams =
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

    #[tokio::test]
    async fn test_create_acme_invoice() {
        let provider = MemoryProvider::new();
        let params = CreateInvoiceParams {
            name: "Acme Co".to_string(),
            status: "open".to_string(),
            method: "card".to_string(),
            amount: 150.0,
        };

        let output = CreateInvoiceTool::execute(&params, &provider).await.unwrap();

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::json!({
                "id": "inv-1",
                "name": "Acme Co",
                "status": "open",
                "method": "card",
                "amount": 150.0,
                "next_suggestion": "Invoice created with ID inv-1. You can fetch it using get_invoice_id(id='inv-1')."
            })
        );
    }

    #[test]
    fn test_params_require_all_fields() {
        let result: Result<CreateInvoiceParams, _> =
            parse_arguments(serde_json::json!({ "name": "Acme", "status": "open", "method": "card" }));
        let err = result.unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_params_accept_integer_amount() {
        let params: CreateInvoiceParams = parse_arguments(serde_json::json!({
            "name": "Acme", "status": "open", "method": "card", "amount": 150
        }))
        .unwrap();
        assert_eq!(params.amount, 150.0);
    }

    #[test]
    fn test_params_reject_string_amount() {
        let result: Result<CreateInvoiceParams, _> = parse_arguments(serde_json::json!({
            "name": "Acme", "status": "open", "method": "card", "amount": "150"
        }));
        assert!(matches!(
            result,
            Err(ToolError::Invoice(InvoiceError::Validation(_)))
        ));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_returns_call_result() {
        let provider: Arc<dyn ConnectionProvider> = Arc::new(MemoryProvider::new());
        let value = CreateInvoiceTool::http_handler(
            serde_json::json!({ "name": "Acme", "status": "open", "method": "card", "amount": 10.5 }),
            provider,
        )
        .await
        .unwrap();

        assert_eq!(value["isError"], false);
        assert_eq!(value["structuredContent"]["id"], "inv-1");
        assert_eq!(value["structuredContent"]["amount"], 10.5);
    }
}
