//! Response shaping shared by the invoice tools.
//!
//! Backend records are copied field-for-field into the tool output and get a
//! deterministic `next_suggestion` pointing at a related tool call.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domains::invoices::InvoiceRecord;
use crate::domains::tools::ToolError;

/// Hint attached to `get_all_invoices` results.
pub const LIST_SUGGESTION: &str =
    "Try fetching a specific invoice by ID using get_invoice_id(id='your_invoice_id').";

/// Hint attached to single-invoice results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextSuggestion {
    /// After fetching: update or delete it.
    UpdateOrDelete,
    /// After creating: fetch the new invoice.
    Created,
    /// After updating: fetch the updated invoice.
    Updated,
    /// After deleting: create another one.
    CreateNew,
}

impl NextSuggestion {
    /// Render the hint for the given invoice id.
    pub fn render(self, id: &str) -> String {
        match self {
            Self::UpdateOrDelete => "You can update this invoice using update_invoice or delete it using delete_invoice.".to_string(),
            Self::Created => format!(
                "Invoice created with ID {id}. You can fetch it using get_invoice_id(id='{id}')."
            ),
            Self::Updated => format!(
                "Invoice with ID {id} updated. You can fetch it using get_invoice_id(id='{id}')."
            ),
            Self::CreateNew => "You can create a new invoice using create_invoice.".to_string(),
        }
    }
}

/// Single-invoice tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceOutput {
    /// Invoice identifier.
    pub id: String,
    /// Invoice name.
    pub name: String,
    /// Invoice status.
    pub status: String,
    /// Payment method.
    pub method: String,
    /// Invoice amount.
    pub amount: f64,
    /// Suggested follow-up tool call.
    pub next_suggestion: String,
}

/// Output of `get_all_invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceListOutput {
    /// Every invoice returned by the backend.
    pub invoices: Vec<InvoiceRecord>,
    /// Number of invoices in `invoices`.
    pub count: usize,
    /// Suggested follow-up tool call.
    pub next_suggestion: String,
}

/// Shape a single backend record.
pub fn shape(record: InvoiceRecord, suggestion: NextSuggestion) -> InvoiceOutput {
    let next_suggestion = suggestion.render(&record.id);
    InvoiceOutput {
        id: record.id,
        name: record.name,
        status: record.status,
        method: record.method,
        amount: record.amount,
        next_suggestion,
    }
}

/// Shape a list of backend records. `count` is taken from the list itself.
pub fn shape_list(records: Vec<InvoiceRecord>) -> InvoiceListOutput {
    InvoiceListOutput {
        count: records.len(),
        invoices: records,
        next_suggestion: LIST_SUGGESTION.to_string(),
    }
}

/// Decode tool arguments into a parameter struct.
pub fn parse_arguments<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap a tool output as an MCP result: JSON text for plain clients plus
/// the same object as structured content.
pub fn to_call_result<T: Serialize>(output: &T) -> Result<CallToolResult, ToolError> {
    let structured = serde_json::to_value(output).map_err(|e| ToolError::internal(e.to_string()))?;
    let text = structured.to_string();

    Ok(CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(structured),
        is_error: Some(false),
        meta: None,
    })
}

/// Serialized [`CallToolResult`] for the HTTP transport.
#[cfg(feature = "http")]
pub fn call_result_value<T: Serialize>(output: &T) -> Result<serde_json::Value, ToolError> {
    let result = to_call_result(output)?;
    serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
}
