//! Configuration management for the gateway.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults. It is
//! read once at startup and never mutated afterwards.

use super::transport::TransportConfig;
use crate::domains::invoices::ConnectionStrategy;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Invoice backend (gRPC) configuration.
    pub backend: BackendConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Load logging settings (`MCP_LOG_LEVEL`, `MCP_LOG_TIMESTAMPS`).
    ///
    /// Reads `.env` as well, so logging can be set up before the rest of
    /// the configuration is parsed and its warnings are not lost.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps = parse_flag(&timestamps).unwrap_or(true);
        }
        logging
    }
}

/// Where and how to reach the invoice backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend host name or address.
    pub host: String,

    /// Backend gRPC port.
    pub port: u16,

    /// Timeout for establishing a connection, in milliseconds.
    pub connect_timeout_ms: u64,

    /// Per-request deadline in milliseconds. `None` means no deadline.
    pub request_timeout_ms: Option<u64>,

    /// Reuse one multiplexed channel instead of connecting per call.
    pub pooled: bool,
}

impl BackendConfig {
    /// URI the gRPC channel connects to.
    pub fn endpoint_uri(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Connection strategy selected by `pooled`.
    pub fn strategy(&self) -> ConnectionStrategy {
        if self.pooled {
            ConnectionStrategy::Shared
        } else {
            ConnectionStrategy::PerCall
        }
    }

    /// Load backend settings from `MCP_BACKEND_*` variables.
    pub fn from_env() -> Self {
        let mut backend = Self::default();

        if let Ok(host) = std::env::var("MCP_BACKEND_HOST") {
            backend.host = host;
        }

        if let Ok(port) = std::env::var("MCP_BACKEND_PORT") {
            match port.parse() {
                Ok(p) => backend.port = p,
                Err(_) => warn!("Ignoring invalid MCP_BACKEND_PORT '{}'", port),
            }
        }

        if let Ok(timeout) = std::env::var("MCP_BACKEND_CONNECT_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => backend.connect_timeout_ms = ms,
                Err(_) => warn!("Ignoring invalid MCP_BACKEND_CONNECT_TIMEOUT_MS '{}'", timeout),
            }
        }

        if let Ok(timeout) = std::env::var("MCP_BACKEND_REQUEST_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => backend.request_timeout_ms = Some(ms),
                Err(_) => warn!("Ignoring invalid MCP_BACKEND_REQUEST_TIMEOUT_MS '{}'", timeout),
            }
        }

        if let Ok(pooled) = std::env::var("MCP_BACKEND_POOLED") {
            match parse_flag(&pooled) {
                Some(flag) => backend.pooled = flag,
                None => warn!("Ignoring invalid MCP_BACKEND_POOLED '{}'", pooled),
            }
        }

        backend
    }

    /// One-line summary of the backend target, for startup logs.
    pub fn describe(&self) -> String {
        format!(
            "{} ({})",
            self.endpoint_uri(),
            match self.strategy() {
                ConnectionStrategy::Shared => "shared channel",
                ConnectionStrategy::PerCall => "connection per call",
            }
        )
    }
}

/// Parse a boolean environment flag. `None` for anything unrecognised.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 50051,
            connect_timeout_ms: 5000,
            request_timeout_ms: None,
            pooled: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "invoice-mcp-gateway".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_BACKEND_HOST`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();
        config.transport = TransportConfig::from_env();
        config.backend = BackendConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const BACKEND_VARS: [&str; 5] = [
        "MCP_BACKEND_HOST",
        "MCP_BACKEND_PORT",
        "MCP_BACKEND_CONNECT_TIMEOUT_MS",
        "MCP_BACKEND_REQUEST_TIMEOUT_MS",
        "MCP_BACKEND_POOLED",
    ];

    fn clear_backend_env() {
        for var in BACKEND_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_backend_defaults() {
        let backend = BackendConfig::default();
        assert_eq!(backend.endpoint_uri(), "http://localhost:50051");
        assert_eq!(backend.strategy(), ConnectionStrategy::PerCall);
        assert!(backend.request_timeout_ms.is_none());
    }

    #[test]
    fn test_backend_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_backend_env();
        unsafe {
            std::env::set_var("MCP_BACKEND_HOST", "invoices.internal");
            std::env::set_var("MCP_BACKEND_PORT", "6000");
            std::env::set_var("MCP_BACKEND_REQUEST_TIMEOUT_MS", "2500");
            std::env::set_var("MCP_BACKEND_POOLED", "true");
        }

        let backend = BackendConfig::from_env();
        assert_eq!(backend.endpoint_uri(), "http://invoices.internal:6000");
        assert_eq!(backend.request_timeout_ms, Some(2500));
        assert_eq!(backend.strategy(), ConnectionStrategy::Shared);

        clear_backend_env();
    }

    #[test]
    fn test_backend_invalid_port_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_backend_env();
        unsafe {
            std::env::set_var("MCP_BACKEND_PORT", "not-a-port");
        }

        let backend = BackendConfig::from_env();
        assert_eq!(backend.port, 50051);

        clear_backend_env();
    }

    #[test]
    fn test_backend_pooled_flag_spellings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        for (value, expected) in [("1", true), ("yes", true), ("TRUE", true), ("0", false), ("off", false)] {
            clear_backend_env();
            unsafe {
                std::env::set_var("MCP_BACKEND_POOLED", value);
            }
            assert_eq!(BackendConfig::from_env().pooled, expected, "value {:?}", value);
        }
        clear_backend_env();
    }

    #[test]
    fn test_backend_invalid_pooled_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_backend_env();
        unsafe {
            std::env::set_var("MCP_BACKEND_POOLED", "maybe");
        }

        let backend = BackendConfig::from_env();
        assert!(!backend.pooled);

        clear_backend_env();
    }

    #[test]
    fn test_logging_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "no");
        }

        let logging = LoggingConfig::from_env();
        assert_eq!(logging.level, "debug");
        assert!(!logging.with_timestamps);

        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_backend_describe() {
        let mut backend = BackendConfig::default();
        assert_eq!(backend.describe(), "http://localhost:50051 (connection per call)");
        backend.pooled = true;
        assert_eq!(backend.describe(), "http://localhost:50051 (shared channel)");
    }

    #[test]
    fn test_config_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "invoice-mcp-gateway");
        assert_eq!(config.logging.level, "info");
    }
}
