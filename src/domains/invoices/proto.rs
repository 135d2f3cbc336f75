//! Protocol buffer bindings for `proto/invoice.proto`.
//!
//! Generated at build time by `tonic-prost-build` (see `build.rs`).

#![allow(clippy::all)]

tonic::include_proto!("invoice");

pub use invoice_service_client::InvoiceServiceClient;
