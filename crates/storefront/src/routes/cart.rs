//! Cart route handlers.
//!
//! Mutations respond with the updated cart view so a consumer can rerender
//! without a second round-trip. An add that the engine refuses (exhausted
//! or unknown id) is indistinguishable from success at the HTTP level - the
//! cart simply comes back unchanged. That mirrors the shop's deliberate
//! silent no-op; the stock status on the product listing is the signal for
//! disabling the action.

use axum::{Form, Json, extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use madpis3d_core::types::ProductId;
use madpis3d_core::{Cart, ShippingPolicy};

use crate::state::AppState;

/// Aggregated cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Cart display data: one line per distinct product plus derived totals.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub free_shipping: bool,
}

impl CartView {
    /// Build the aggregated view of the current cart contents.
    #[must_use]
    pub fn build(cart: &Cart, policy: &ShippingPolicy) -> Self {
        let items = cart
            .lines()
            .iter()
            .filter_map(|line| {
                cart.catalog().get(line.product_id).map(|product| CartItemView {
                    product_id: line.product_id,
                    name: product.name.clone(),
                    quantity: line.quantity,
                    unit_price: product.price.amount,
                    line_total: product.price.amount * Decimal::from(line.quantity),
                })
            })
            .collect();

        let totals = cart.totals(policy);
        Self {
            items,
            item_count: cart.total_items(),
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            total: totals.total,
            free_shipping: totals.free_shipping(),
        }
    }
}

/// Cart count badge data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Display the aggregated cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().read().await;
    Json(CartView::build(&cart, &state.config().shipping))
}

/// Add one unit of a product to the cart.
///
/// Out-of-stock and unknown ids are silent no-ops; the response is the
/// (possibly unchanged) cart view either way.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> impl IntoResponse {
    let mut cart = state.cart().write().await;
    let id = ProductId::new(form.product_id);
    cart.add(id);
    tracing::debug!(product_id = %id, in_cart = cart.item_count(id), "Cart add");

    Json(CartView::build(&cart, &state.config().shipping))
}

/// Remove one unit of a product from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let mut cart = state.cart().write().await;
    let id = ProductId::new(form.product_id);
    cart.remove(id);

    Json(CartView::build(&cart, &state.config().shipping))
}

/// Get the cart badge count.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().read().await;
    Json(CartCountView {
        count: cart.total_items(),
    })
}
