//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing with availability
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Aggregated cart view with totals
//! POST /cart/add               - Add one unit (silent no-op when out of stock)
//! POST /cart/remove            - Remove one unit (no-op when absent)
//! GET  /cart/count             - Cart badge count
//!
//! # Checkout
//! POST /checkout               - Redirect to PayPal hosted checkout
//! ```

pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout redirect
        .route("/checkout", post(checkout::checkout))
}
