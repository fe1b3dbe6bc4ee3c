//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use madpis3d_core::{Cart, Catalog};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the read-only catalog, and the session cart. A single
/// user session owns the cart exclusively; the lock is only there because
/// handlers run on the async runtime, not to coordinate multiple shoppers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    cart: RwLock<Cart>,
}

impl AppState {
    /// Create a new application state with an empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Arc<Catalog>) -> Self {
        let cart = RwLock::new(Cart::new(Arc::clone(&catalog)));
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the session cart lock.
    #[must_use]
    pub fn cart(&self) -> &RwLock<Cart> {
        &self.inner.cart
    }
}
