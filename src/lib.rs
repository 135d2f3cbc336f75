//! Invoice MCP Gateway
//!
//! This crate exposes a backend invoice service (gRPC) to AI agents as a set
//! of Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the
//!   transports (HTTP JSON-RPC and STDIO)
//! - **domains**: business logic organized by bounded contexts
//!   - **invoices**: request builders, the gRPC client and the connection provider
//!   - **tools**: the five invoice tools, their registry and router
//!
//! # Example
//!
//! ```rust,no_run
//! use invoice_mcp_gateway::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
