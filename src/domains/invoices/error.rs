//! Error taxonomy for invoice operations.

use thiserror::Error;
use tonic::Code;

/// Result type for invoice operations.
pub type InvoiceResult<T> = Result<T, InvoiceError>;

/// Errors raised while translating a tool call into a backend RPC.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvoiceError {
    /// A required argument is missing, empty or of the wrong type.
    /// Raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend could not be reached when acquiring a connection.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend answered with a failure status or an unexpected payload.
    #[error("Backend error [{code:?}]: {message}")]
    Backend { code: Code, message: String },
}

impl InvoiceError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a backend error for a response missing expected fields.
    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::Backend {
            code: Code::Internal,
            message: format!("malformed response: {}", msg.into()),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Connection(_) => "connection",
            Self::Backend { .. } => "backend",
        }
    }
}

impl From<tonic::Status> for InvoiceError {
    fn from(status: tonic::Status) -> Self {
        Self::Backend {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

impl From<tonic::transport::Error> for InvoiceError {
    fn from(err: tonic::transport::Error) -> Self {
        // The top-level message is just "transport error"; the cause says why.
        let detail = std::error::Error::source(&err)
            .map(|source| format!("{}: {}", err, source))
            .unwrap_or_else(|| err.to_string());
        Self::Connection(detail)
    }
}
