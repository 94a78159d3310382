//! `cloudmock` server entry point.
//!
//! Loads configuration, initializes structured logging, and starts the
//! Axum HTTP server with graceful shutdown. When a live upstream is
//! configured the mock is not activated and the process exits — client
//! suites should point at the upstream instead.

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use cloudmock_server::config::{ApiMode, ServerConfig};
use cloudmock_server::routes;

/// Concurrent in-flight request cap. Test suites tend to stampede.
const MAX_IN_FLIGHT_REQUESTS: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    // The live/mock switch: with a real backend configured there is
    // nothing for this process to serve.
    if let ApiMode::Live { upstream } = &config.mode {
        info!(upstream = %upstream, "live upstream configured, mock API not activated");
        return Ok(());
    }

    let app = build_app();

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "cloudmock server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("cloudmock server stopped");
    Ok(())
}

/// Assemble the mock router with its middleware stack.
fn build_app() -> Router {
    // CORS is wide open — the mock is exercised by arbitrary test clients
    // and enforces no authentication anyway.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ]);

    routes::api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
