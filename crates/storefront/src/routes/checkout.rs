//! Checkout route handler.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::checkout::{ShippingDetails, checkout_url, order_description};
use crate::state::AppState;

/// Hand the cart off to PayPal's hosted checkout.
///
/// Builds the order description from the aggregated cart lines and the
/// submitted shipping details, then redirects to the payment page. An
/// empty cart has nothing to pay for and redirects back to the cart view.
#[instrument(skip(state, form))]
pub async fn checkout(State(state): State<AppState>, Form(form): Form<ShippingDetails>) -> Response {
    let cart = state.cart().read().await;
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    let config = state.config();
    let totals = cart.totals(&config.shipping);
    let description = order_description(&cart, &form);
    let url = checkout_url(&config.paypal, config.currency, &totals, &description);

    tracing::info!(total = %totals.total, items = cart.total_items(), "Checkout hand-off");
    Redirect::to(&url).into_response()
}
