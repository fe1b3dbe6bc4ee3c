//! Madpis3D Storefront - Public shop binary.
//!
//! This binary serves the storefront JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework over the core cart & availability engine
//! - Static catalog loaded once at startup (JSON file or built-in seed)
//! - Single in-memory session cart; nothing is persisted
//! - Checkout hands off to PayPal's hosted `_xclick` endpoint via redirect

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use madpis3d_storefront::config::StorefrontConfig;
use madpis3d_storefront::state::AppState;
use madpis3d_storefront::{app, catalog};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "madpis3d_storefront=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load the catalog once; it is read-only for the process lifetime
    let catalog = Arc::new(catalog::load(&config).expect("Failed to load catalog"));
    tracing::info!(products = catalog.len(), "Catalog ready");

    // Build application state and router
    let addr = config.socket_addr();
    let state = AppState::new(config, catalog);
    let router = app(state);

    // Start server
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
