//! Tools domain module.
//!
//! Tools are the operations MCP clients can call. Each invoice tool turns its
//! arguments into one backend RPC and shapes the reply.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/invoices/`
//! 2. Define params, execute(), http_handler() and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::{BACKEND_ERROR_CODE, CONNECTION_ERROR_CODE, ToolError};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
