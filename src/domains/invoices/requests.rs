//! Request builders.
//!
//! Pure functions turning tool arguments into backend request messages. The
//! output of each builder is sent to the backend as-is.

use super::error::{InvoiceError, InvoiceResult};
use super::proto::{
    CreateInvoiceRequest, DeleteInvoiceRequest, GetAllInvoicesRequest, GetInvoiceRequest,
    UpdateInvoiceRequest,
};

/// Default `name`/`status`/`method` for `update_invoice` when not supplied.
pub const UPDATE_DEFAULT_TEXT: &str = "";

/// Default `amount` for `update_invoice` when not supplied.
pub const UPDATE_DEFAULT_AMOUNT: f64 = 0.0;

/// Build the "list all" request.
pub fn build_get_all() -> GetAllInvoicesRequest {
    GetAllInvoicesRequest {}
}

/// Build a lookup request for a single invoice.
pub fn build_get_by_id(id: &str) -> InvoiceResult<GetInvoiceRequest> {
    Ok(GetInvoiceRequest {
        id: require_id(id)?,
    })
}

/// Build a create request. Business rules (status vocabulary, amount range)
/// are left to the backend.
pub fn build_create(name: &str, status: &str, method: &str, amount: f64) -> CreateInvoiceRequest {
    CreateInvoiceRequest {
        name: name.to_string(),
        status: status.to_string(),
        method: method.to_string(),
        amount,
    }
}

/// Build an update request.
///
/// Every optional field is sent as present, including the empty-string and
/// zero defaults. Whether those mean "no change" is decided by the backend.
pub fn build_update(
    id: &str,
    name: &str,
    status: &str,
    method: &str,
    amount: f64,
) -> InvoiceResult<UpdateInvoiceRequest> {
    Ok(UpdateInvoiceRequest {
        id: require_id(id)?,
        name: Some(name.to_string()),
        status: Some(status.to_string()),
        method: Some(method.to_string()),
        amount: Some(amount),
    })
}

/// Build a delete request.
pub fn build_delete(id: &str) -> InvoiceResult<DeleteInvoiceRequest> {
    Ok(DeleteInvoiceRequest {
        id: require_id(id)?,
    })
}

fn require_id(id: &str) -> InvoiceResult<String> {
    if id.trim().is_empty() {
        return Err(InvoiceError::validation("'id' must be a non-empty string"));
    }
    Ok(id.to_string())
}
