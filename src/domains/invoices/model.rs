//! Invoice record as exposed to tool callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::proto;

/// Canonical backend representation of an invoice.
///
/// Owned and persisted by the backend service; the gateway only passes it
/// through, so no field is validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvoiceRecord {
    /// Server-assigned invoice identifier.
    pub id: String,
    /// Invoice name (customer or description).
    pub name: String,
    /// Invoice status (open vocabulary, e.g. "open", "paid").
    pub status: String,
    /// Payment method (e.g. "card", "transfer").
    pub method: String,
    /// Invoice amount.
    pub amount: f64,
}

impl From<proto::Invoice> for InvoiceRecord {
    fn from(invoice: proto::Invoice) -> Self {
        Self {
            id: invoice.id,
            name: invoice.name,
            status: invoice.status,
            method: invoice.method,
            amount: invoice.amount,
        }
    }
}
