//! Connection provider for the invoice backend.
//!
//! Every invocation asks the provider for its own [`InvoiceBackend`] handle.
//! The handle lives inside the invocation's future, so it is released when
//! the call completes or the caller goes away.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info, warn};

use super::client::{GrpcInvoiceBackend, InvoiceBackend};
use super::error::{InvoiceError, InvoiceResult};
use crate::core::config::BackendConfig;

/// Source of backend handles.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Obtain a handle that can be used independently of any other
    /// in-flight invocation.
    async fn acquire(&self) -> InvoiceResult<Box<dyn InvoiceBackend>>;

    /// Human-readable backend target, for logs.
    fn target(&self) -> String;
}

/// How the gRPC provider manages connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStrategy {
    /// Open a new connection for every invocation.
    #[default]
    PerCall,
    /// Connect once and hand out clones of the multiplexed channel.
    Shared,
}

/// gRPC-backed [`ConnectionProvider`].
pub struct GrpcConnectionProvider {
    endpoint: Endpoint,
    strategy: ConnectionStrategy,
    shared: OnceCell<Channel>,
}

impl std::fmt::Debug for GrpcConnectionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrpcConnectionProvider")
            .field("target", &self.endpoint.uri())
            .field("strategy", &self.strategy)
            .field("connected", &self.shared.initialized())
            .finish()
    }
}

impl GrpcConnectionProvider {
    /// Build a provider from backend configuration.
    ///
    /// Fails with a connection error if the configured address is not a
    /// valid URI. No network traffic happens here.
    pub fn new(config: &BackendConfig) -> InvoiceResult<Self> {
        let uri = config.endpoint_uri();
        let mut endpoint = Endpoint::from_shared(uri.clone()).map_err(|e| {
            InvoiceError::connection(format!("invalid backend address '{}': {}", uri, e))
        })?;

        endpoint = endpoint.connect_timeout(Duration::from_millis(config.connect_timeout_ms));
        if let Some(timeout_ms) = config.request_timeout_ms {
            endpoint = endpoint.timeout(Duration::from_millis(timeout_ms));
        }

        Ok(Self {
            endpoint,
            strategy: config.strategy(),
            shared: OnceCell::new(),
        })
    }

    /// The connection strategy in use.
    pub fn strategy(&self) -> ConnectionStrategy {
        self.strategy
    }

    async fn connect(&self) -> InvoiceResult<Channel> {
        debug!(target_uri = %self.endpoint.uri(), "Connecting to invoice backend");
        self.endpoint.connect().await.map_err(|e| {
            let err = InvoiceError::from(e);
            warn!("Invoice backend unreachable at {}: {}", self.endpoint.uri(), err);
            err
        })
    }

    async fn channel(&self) -> InvoiceResult<Channel> {
        match self.strategy {
            ConnectionStrategy::PerCall => self.connect().await,
            ConnectionStrategy::Shared => {
                // A failed connect leaves the cell empty, so the next call retries.
                let channel = self
                    .shared
                    .get_or_try_init(|| async {
                        let channel = self.connect().await?;
                        info!("Shared channel to {} established", self.endpoint.uri());
                        Ok::<_, InvoiceError>(channel)
                    })
                    .await?;
                Ok(channel.clone())
            }
        }
    }
}

#[async_trait]
impl ConnectionProvider for GrpcConnectionProvider {
    async fn acquire(&self) -> InvoiceResult<Box<dyn InvoiceBackend>> {
        let channel = self.channel().await?;
        Ok(Box::new(GrpcInvoiceBackend::new(channel)))
    }

    fn target(&self) -> String {
        self.endpoint.uri().to_string()
    }
}
