//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the gateway:
//! error handling, configuration, the MCP server handler and the transport
//! layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{BackendConfig, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
