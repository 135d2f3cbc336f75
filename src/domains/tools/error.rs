//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use rmcp::model::ErrorCode;
use thiserror::Error;

use crate::domains::invoices::InvoiceError;

/// JSON-RPC code for an unreachable backend (server-defined range).
pub const CONNECTION_ERROR_CODE: i32 = -32001;

/// JSON-RPC code for a failure reported by the backend (server-defined range).
pub const BACKEND_ERROR_CODE: i32 = -32002;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The invoice operation behind the tool failed.
    #[error(transparent)]
    Invoice(#[from] InvoiceError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::Invoice(InvoiceError::validation(msg))
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Invoice(e) => e.kind(),
            Self::Internal(_) => "internal",
        }
    }

    /// Convert into the MCP error returned to the calling agent.
    pub fn to_mcp_error(&self) -> McpError {
        let message = self.to_string();
        match self {
            Self::NotFound(_) => McpError::new(ErrorCode::METHOD_NOT_FOUND, message, None),
            Self::Invoice(InvoiceError::Validation(_)) => McpError::invalid_params(
                message,
                Some(serde_json::json!({ "kind": self.kind() })),
            ),
            Self::Invoice(InvoiceError::Connection(_)) => McpError::new(
                ErrorCode(CONNECTION_ERROR_CODE),
                message,
                Some(serde_json::json!({ "kind": self.kind() })),
            ),
            Self::Invoice(InvoiceError::Backend { code, message: detail }) => McpError::new(
                ErrorCode(BACKEND_ERROR_CODE),
                message,
                Some(serde_json::json!({
                    "kind": self.kind(),
                    "grpc_code": *code as i32,
                    "grpc_status": format!("{:?}", code),
                    "detail": detail,
                })),
            ),
            Self::Internal(_) => McpError::internal_error(message, None),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        err.to_mcp_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_invalid_params() {
        let err = ToolError::invalid_arguments("'id' must be a non-empty string");
        let mcp = err.to_mcp_error();
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(mcp.data.unwrap()["kind"], "validation");
    }

    #[test]
    fn test_connection_has_own_code() {
        let err = ToolError::from(InvoiceError::connection("connection refused"));
        let mcp = err.to_mcp_error();
        assert_eq!(mcp.code, ErrorCode(CONNECTION_ERROR_CODE));
        assert!(mcp.message.contains("connection refused"));
    }

    #[test]
    fn test_backend_status_is_exposed() {
        let err = ToolError::from(InvoiceError::from(tonic::Status::not_found("no such invoice")));
        let mcp = McpError::from(err);
        assert_eq!(mcp.code, ErrorCode(BACKEND_ERROR_CODE));
        let data = mcp.data.unwrap();
        assert_eq!(data["kind"], "backend");
        assert_eq!(data["grpc_status"], "NotFound");
        assert_eq!(data["grpc_code"], tonic::Code::NotFound as i32);
        assert_eq!(data["detail"], "no such invoice");
    }

    #[test]
    fn test_unknown_tool() {
        let mcp = ToolError::not_found("nope").to_mcp_error();
        assert_eq!(mcp.code, ErrorCode::METHOD_NOT_FOUND);
    }
}
