//! Checkout hand-off to PayPal's hosted checkout.
//!
//! The hand-off is the shop's one external protocol: a redirect to the
//! `_xclick` endpoint carrying the business account, the computed total,
//! the currency code, and a free-text order description. Every interpolated
//! field is percent-encoded explicitly - the description holds Hebrew
//! product names and embedded newlines, and an unescaped value would break
//! the third-party integration.
//!
//! Fire-and-forget: the server issues the redirect and retains no order
//! state.

use serde::{Deserialize, Serialize};

use madpis3d_core::types::CurrencyCode;
use madpis3d_core::{Cart, CartTotals};

use crate::config::PayPalConfig;

/// Shipping details collected by the checkout form.
///
/// Free-text fields; presence is enforced by the form, not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    #[serde(default)]
    pub notes: String,
}

/// Build the free-text order description embedded in the PayPal item name.
///
/// One aggregated entry per distinct product, in first-occurrence order,
/// followed by the shipping details block.
#[must_use]
pub fn order_description(cart: &Cart, shipping: &ShippingDetails) -> String {
    let order: Vec<String> = cart
        .lines()
        .iter()
        .filter_map(|line| {
            cart.catalog()
                .get(line.product_id)
                .map(|product| format!("{} x{}", product.name, line.quantity))
        })
        .collect();

    format!(
        "Order: {}\nShipping to: {}\nAddress: {}, {} {}\nPhone: {}\nEmail: {}\nNotes: {}",
        order.join(", "),
        shipping.full_name,
        shipping.address,
        shipping.city,
        shipping.zip_code,
        shipping.phone,
        shipping.email,
        shipping.notes,
    )
}

/// Build the PayPal hosted-checkout redirect URL.
///
/// The shopper is sent here to pay; nothing about the hand-off is awaited
/// or confirmed.
#[must_use]
pub fn checkout_url(
    paypal: &PayPalConfig,
    currency: CurrencyCode,
    totals: &CartTotals,
    description: &str,
) -> String {
    format!(
        "{}?cmd=_xclick&business={}&item_name={}&amount={}&currency_code={}",
        paypal.endpoint,
        urlencoding::encode(&paypal.business),
        urlencoding::encode(description),
        totals.total,
        currency.code(),
    )
}
