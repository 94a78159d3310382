//! Server configuration for `cloudmock`.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `CLOUDMOCK_*` environment variables.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Whether to serve the mock API or defer to a live upstream.
    pub mode: ApiMode,
}

/// The live/mock switch.
///
/// The mock router is only built in [`ApiMode::Mock`]; when a live upstream
/// is configured the process has nothing to serve — clients should talk to
/// the upstream directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiMode {
    /// Serve canned responses (the default).
    Mock,
    /// A real backend is available at this URL; do not serve the mock.
    Live { upstream: String },
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`)
    /// - `CLOUDMOCK_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `CLOUDMOCK_LOG_LEVEL` — log filter (default: `info`)
    /// - `CLOUDMOCK_UPSTREAM_URL` — live backend URL; when set, the mock is not activated
    #[must_use]
    pub fn from_env() -> Self {
        // Priority: CLOUDMOCK_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Ok(addr) = std::env::var("CLOUDMOCK_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8080);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8080))
        };

        let log_level =
            std::env::var("CLOUDMOCK_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        let mode = match std::env::var("CLOUDMOCK_UPSTREAM_URL") {
            Ok(upstream) if !upstream.is_empty() => ApiMode::Live { upstream },
            _ => ApiMode::Mock,
        };

        Self {
            bind_addr,
            log_level,
            mode,
        }
    }
}
