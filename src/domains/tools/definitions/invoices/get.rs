//! `get_invoice_id` tool definition.

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
use crate::domains::invoices::{ConnectionProvider, requests::build_get_by_id};
use crate::domains::tools::ToolError;

/// Parameters for fetching one invoice.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetInvoiceParams {
    /// Identifier of the invoice to fetch.
    pub id: String,
}

/// Lookup tool - fetches a single invoice by id.
pub struct GetInvoiceTool;

impl GetInvoiceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_invoice_id";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a specific invoice by ID from the invoice service.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(id = %params.id))]
    pub async fn execute(
        params: &GetInvoiceParams,
        provider: &dyn ConnectionProvider,
    ) -> Result<InvoiceOutput, ToolError> {
        let request = build_get_by_id(&params.id)?;

        let mut backend = provider.acquire().await?;
        let record = backend
            .get_by_id(request)
            .await
            .inspect_err(|e| warn!("Fetching invoice '{}' failed: {}", params.id, e))?;

        info!("Fetched invoice {}", record.id);
        Ok(shape(record, NextSuggestion::UpdateOrDelete))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetInvoiceParams = parse_arguments(arguments)?;
        let output = Self::execute(&params, provider.as_ref()).await?;
        super::shape::call_result_value(&output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetInvoiceParams>().into(),
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
                let params: GetInvoiceParams = parse_arguments(serde_json::Value::Object(args))?;
                let output = Self::execute(&params, provider.as_ref()).await?;
                Ok(to_call_result(&output)?)
            }
            .boxed()
        })
    }
}
