//! `update_invoice` tool definition.
//!
//! Only `id` is required. Omitted fields are sent to the backend as empty
//! strings and `0.0`; the backend decides whether those overwrite or keep
//! the stored values.

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
use crate::domains::invoices::requests::{UPDATE_DEFAULT_AMOUNT, UPDATE_DEFAULT_TEXT, build_update};
use crate::domains::invoices::ConnectionProvider;
use crate::domains::tools::ToolError;

fn default_text() -> String {
    UPDATE_DEFAULT_TEXT.to_string()
}

fn default_amount() -> f64 {
    UPDATE_DEFAULT_AMOUNT
}

/// Parameters for updating an invoice.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateInvoiceParams {
    /// Identifier of the invoice to update.
    pub id: String,

    /// New invoice name (default: "").
    #[serde(default = "default_text")]
    pub name: String,

    /// New invoice status (default: "").
    #[serde(default = "default_text")]
    pub status: String,

    /// New payment method (default: "").
    #[serde(default = "default_text")]
    pub method: String,

    /// New amount (default: 0.0).
    #[serde(default = "default_amount")]
    pub amount: f64,
}

/// Update tool - modifies an existing invoice.
pub struct UpdateInvoiceTool;

impl UpdateInvoiceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_invoice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing invoice in the invoice service. Only 'id' is required; omitted fields are sent as empty strings or 0.0.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(id = %params.id))]
    pub async fn execute(
        params: &UpdateInvoiceParams,
        provider: &dyn ConnectionProvider,
    ) -> Result<InvoiceOutput, ToolError> {
        let request = build_update(
            &params.id,
            &params.name,
            &params.status,
            &params.method,
            params.amount,
        )?;

        let mut backend = provider.acquire().await?;
        let record = backend
            .update(request)
            .await
            .inspect_err(|e| warn!("Updating invoice '{}' failed: {}", params.id, e))?;

        info!("Updated invoice {}", record.id);
        Ok(shape(record, NextSuggestion::Updated))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        provider: Arc<dyn ConnectionProvider>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: UpdateInvoiceParams = parse_arguments(arguments)?;
        let output = Self::execute(&params, provider.as_ref()).await?;
        super::shape::call_result_value(&output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<UpdateInvoiceParams>().into(),
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
                let params: UpdateInvoiceParams =
                    parse_arguments(serde_json::Value::Object(args))?;
                let output = Self::execute(&params, provider.as_ref()).await?;
                Ok(to_call_result(&output)?)
            }
            .boxed()
        })
    }
}
