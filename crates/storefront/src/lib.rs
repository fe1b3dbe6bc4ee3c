//! Madpis3D Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router to be exercised in tests and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to
/// check beyond the process itself.
async fn health() -> &'static str {
    "ok"
}

/// Build the complete storefront application.
///
/// The same composition serves the binary and the integration tests.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
