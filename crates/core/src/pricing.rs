//! Shipping policy and derived cart totals.
//!
//! Pricing is a pure function of the cart contents: subtotal is the sum of
//! unit prices over all occurrences, shipping is a flat fee waived at the
//! free-shipping threshold, and total is their sum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// Default flat shipping fee, in whole currency units.
pub const DEFAULT_SHIPPING_COST: u32 = 25;

/// Default subtotal at which shipping becomes free, in whole currency units.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: u32 = 150;

/// The shop's shipping rule: a flat fee below the threshold, free at or
/// above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Flat fee charged when the subtotal is below the threshold.
    pub shipping_cost: Decimal,
    /// Subtotal at which shipping is waived (inclusive).
    pub free_shipping_threshold: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            shipping_cost: Decimal::from(DEFAULT_SHIPPING_COST),
            free_shipping_threshold: Decimal::from(DEFAULT_FREE_SHIPPING_THRESHOLD),
        }
    }
}

/// Derived monetary figures for the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Whether the shipping fee was waived.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

impl Cart {
    /// Compute subtotal, shipping, and total for the current contents.
    ///
    /// `subtotal = Σ price × quantity` over aggregated lines; `shipping`
    /// is the policy's flat fee, waived once the subtotal reaches the
    /// free-shipping threshold; `total = subtotal + shipping`.
    #[must_use]
    pub fn totals(&self, policy: &ShippingPolicy) -> CartTotals {
        let subtotal: Decimal = self
            .lines()
            .iter()
            .map(|line| {
                self.catalog().get(line.product_id).map_or(Decimal::ZERO, |product| {
                    product.price.amount * Decimal::from(line.quantity)
                })
            })
            .sum();

        let shipping = if subtotal >= policy.free_shipping_threshold {
            Decimal::ZERO
        } else {
            policy.shipping_cost
        };

        CartTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{Catalog, Product};
    use crate::types::{CurrencyCode, Price, ProductId};

    fn catalog() -> Arc<Catalog> {
        let products = vec![
            product(1, 120, 5),
            product(2, 80, 3),
            product(3, 50, 8),
            product(4, 30, 2),
            product(5, 149, 1),
            product(6, 150, 1),
        ];
        Arc::new(Catalog::new(products).unwrap())
    }

    fn product(id: i32, price: u32, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("מוצר {id}"),
            name_en: format!("Product {id}"),
            description: String::new(),
            image: String::new(),
            price: Price::from_units(price, CurrencyCode::ILS),
            stock,
        }
    }

    fn dec(n: u32) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_subtotal_sums_over_occurrences() {
        let mut cart = Cart::new(catalog());
        for id in [1, 1, 2].map(ProductId::new) {
            cart.add(id);
        }

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.subtotal, dec(320));
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let mut cart = Cart::new(catalog());
        cart.add(ProductId::new(6)); // exactly 150

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, dec(150));
        assert!(totals.free_shipping());
    }

    #[test]
    fn test_flat_fee_below_threshold() {
        let mut cart = Cart::new(catalog());
        cart.add(ProductId::new(5)); // 149, one under

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.shipping, dec(25));
        assert_eq!(totals.total, dec(174));
        assert!(!totals.free_shipping());
    }

    #[test]
    fn test_three_large_vases_ship_free() {
        let mut cart = Cart::new(catalog());
        for _ in 0..3 {
            cart.add(ProductId::new(1));
        }

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.subtotal, dec(360));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, dec(360));
    }

    #[test]
    fn test_single_small_vase_pays_shipping() {
        let mut cart = Cart::new(catalog());
        cart.add(ProductId::new(2)); // 80

        let totals = cart.totals(&ShippingPolicy::default());
        assert_eq!(totals.subtotal, dec(80));
        assert_eq!(totals.shipping, dec(25));
        assert_eq!(totals.total, dec(105));
    }

    #[test]
    fn test_total_is_always_subtotal_plus_shipping() {
        let mut cart = Cart::new(catalog());
        let policy = ShippingPolicy::default();

        for id in [4, 2, 1, 1, 3].map(ProductId::new) {
            cart.add(id);
            let totals = cart.totals(&policy);
            assert_eq!(totals.total, totals.subtotal + totals.shipping);
        }
    }

    #[test]
    fn test_custom_policy() {
        let mut cart = Cart::new(catalog());
        cart.add(ProductId::new(2)); // 80

        let policy = ShippingPolicy {
            shipping_cost: dec(10),
            free_shipping_threshold: dec(50),
        };
        let totals = cart.totals(&policy);
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, dec(80));
    }
}
