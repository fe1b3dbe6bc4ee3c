//! Integration tests for the Madpis3D storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p madpis3d-integration-tests
//! ```
//!
//! Each test boots the storefront router on an ephemeral port with the
//! built-in seed catalog and drives it over HTTP. No external services are
//! involved; the PayPal hand-off is asserted on the redirect URL, never
//! followed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use madpis3d_core::types::CurrencyCode;
use madpis3d_core::ShippingPolicy;
use madpis3d_storefront::config::{DEFAULT_PAYPAL_ENDPOINT, PayPalConfig, StorefrontConfig};
use madpis3d_storefront::state::AppState;
use madpis3d_storefront::{app, catalog};

/// A storefront instance running on an ephemeral port.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Boot the storefront with the seed catalog and default shop rules.
    ///
    /// The client does not follow redirects - checkout tests assert on
    /// the `Location` header instead of fetching PayPal.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started or the client cannot be
    /// built; either is a broken test environment.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            host: std::net::Ipv4Addr::LOCALHOST.into(),
            port: 0,
            catalog_path: None,
            currency: CurrencyCode::ILS,
            shipping: ShippingPolicy::default(),
            paypal: PayPalConfig {
                endpoint: DEFAULT_PAYPAL_ENDPOINT.to_string(),
                business: "madpis3d@gmail.com".to_string(),
            },
        };

        let catalog = Arc::new(catalog::load(&config).expect("seed catalog must load"));
        let state = AppState::new(config, catalog);
        let router = app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("listener has no local addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("storefront server error");
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build http client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// Build a full URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Add one unit of a product to the cart, returning the cart view.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the response is not JSON.
    pub async fn add_to_cart(&self, product_id: i32) -> serde_json::Value {
        let response = self
            .client
            .post(self.url("/cart/add"))
            .form(&[("product_id", product_id.to_string())])
            .send()
            .await
            .expect("cart add request failed");
        assert!(response.status().is_success());
        response.json().await.expect("cart add response not json")
    }

    /// Remove one unit of a product from the cart, returning the cart view.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the response is not JSON.
    pub async fn remove_from_cart(&self, product_id: i32) -> serde_json::Value {
        let response = self
            .client
            .post(self.url("/cart/remove"))
            .form(&[("product_id", product_id.to_string())])
            .send()
            .await
            .expect("cart remove request failed");
        assert!(response.status().is_success());
        response
            .json()
            .await
            .expect("cart remove response not json")
    }

    /// Fetch the product listing.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the response is not JSON.
    pub async fn products(&self) -> serde_json::Value {
        let response = self
            .client
            .get(self.url("/products"))
            .send()
            .await
            .expect("products request failed");
        assert!(response.status().is_success());
        response.json().await.expect("products response not json")
    }

    /// Fetch the aggregated cart view.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the response is not JSON.
    pub async fn cart(&self) -> serde_json::Value {
        let response = self
            .client
            .get(self.url("/cart"))
            .send()
            .await
            .expect("cart request failed");
        assert!(response.status().is_success());
        response.json().await.expect("cart response not json")
    }
}

/// Find a product view by id within a `/products` response.
///
/// # Panics
///
/// Panics if the listing does not contain the id.
#[must_use]
pub fn product_by_id(products: &serde_json::Value, id: i64) -> &serde_json::Value {
    products
        .as_array()
        .expect("products response is an array")
        .iter()
        .find(|product| product["id"] == id)
        .expect("product id missing from listing")
}
