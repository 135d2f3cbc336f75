//! Invoices domain module.
//!
//! Everything that talks to the backend invoice service lives here:
//!
//! - `proto.rs` - gRPC messages and client for `invoice.InvoiceService`
//! - `model.rs` - The invoice record handed to tool callers
//! - `requests.rs` - Request builders (tool arguments to RPC messages)
//! - `client.rs` - The `InvoiceBackend` handle over a tonic channel
//! - `provider.rs` - Connection provider (per-call or shared channel)
//! - `error.rs` - Validation / connection / backend error taxonomy

mod client;
mod error;
mod model;
pub mod proto;
mod provider;
pub mod requests;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{GrpcInvoiceBackend, InvoiceBackend};
pub use error::{InvoiceError, InvoiceResult};
pub use model::InvoiceRecord;
pub use provider::{ConnectionProvider, ConnectionStrategy, GrpcConnectionProvider};
