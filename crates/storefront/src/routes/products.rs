//! Product route handlers.
//!
//! Products are served with their availability already derived against the
//! session cart, so a consumer never has to recompute stock arithmetic.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use tracing::instrument;

use madpis3d_core::types::{Price, ProductId};
use madpis3d_core::{Cart, Product, StockLevel};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data with cart-derived availability.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub name_en: String,
    pub description: String,
    pub image: String,
    pub price: Price,
    /// Stock still available to add (total minus in-cart).
    pub available_stock: u32,
    /// Units of this product already in the cart.
    pub in_cart: u32,
    pub stock_status: StockStatusView,
}

/// Stock availability display data.
///
/// `remaining` is only present for low stock, where the exact count is
/// part of the warning.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StockStatusView {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
}

impl From<StockLevel> for StockStatusView {
    fn from(level: StockLevel) -> Self {
        match level {
            StockLevel::OutOfStock => Self {
                status: "out_of_stock",
                remaining: None,
            },
            StockLevel::Low(remaining) => Self {
                status: "low_stock",
                remaining: Some(remaining),
            },
            StockLevel::InStock => Self {
                status: "in_stock",
                remaining: None,
            },
        }
    }
}

impl ProductView {
    /// Build a view of a product against the current cart contents.
    #[must_use]
    pub fn build(product: &Product, cart: &Cart) -> Self {
        let available_stock = cart.available_stock(product.id);
        Self {
            id: product.id,
            name: product.name.clone(),
            name_en: product.name_en.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price,
            available_stock,
            in_cart: cart.item_count(product.id),
            stock_status: StockLevel::for_remaining(available_stock).into(),
        }
    }
}

/// List all products with availability.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().read().await;
    let products: Vec<ProductView> = state
        .catalog()
        .products()
        .iter()
        .map(|product| ProductView::build(product, &cart))
        .collect();
    Json(products)
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<ProductView>> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let cart = state.cart().read().await;
    Ok(Json(ProductView::build(product, &cart)))
}
