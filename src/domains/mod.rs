//! Domains module containing business logic organized by bounded contexts.
//!
//! - **invoices**: the backend invoice service (request builders, gRPC
//!   client, connection provider)
//! - **tools**: the MCP tools exposed to agents on top of `invoices`

pub mod invoices;
pub mod tools;
