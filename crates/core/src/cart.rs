//! The cart & availability engine.
//!
//! A cart is an ordered multiset of product ids - one occurrence per unit,
//! no explicit quantity field. Quantities, availability, and totals are all
//! derived by counting occurrences against the shared read-only catalog.
//!
//! Invariant: the count of any product id in the cart never exceeds that
//! product's total stock. [`Cart::add`] enforces this by refusing (silently)
//! to add a unit with no available stock.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::ProductId;

/// One aggregated cart line: a product and how many units of it are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The mutable multiset of product units selected by the current session.
///
/// All mutation and every derived query go through this type; the catalog
/// reference is read-only and shared with the rest of the app.
#[derive(Debug, Clone)]
pub struct Cart {
    catalog: Arc<Catalog>,
    items: Vec<ProductId>,
}

impl Cart {
    /// Create an empty cart over a shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            items: Vec::new(),
        }
    }

    /// The catalog this cart validates against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Stock still available to add: total stock minus units in the cart.
    ///
    /// Never negative; unknown ids report `0`.
    #[must_use]
    pub fn available_stock(&self, id: ProductId) -> u32 {
        self.catalog.stock(id).saturating_sub(self.item_count(id))
    }

    /// Add one unit of a product.
    ///
    /// Succeeds only while available stock is positive. An exhausted or
    /// unknown id is a silent no-op rather than an error - the shop
    /// disables the action in the UI and treats a refused add as nothing
    /// happening.
    pub fn add(&mut self, id: ProductId) {
        if self.available_stock(id) > 0 {
            self.items.push(id);
        }
    }

    /// Remove one unit of a product (first occurrence by position).
    ///
    /// A no-op when the id is not in the cart, including on an empty cart.
    pub fn remove(&mut self, id: ProductId) {
        if let Some(position) = self.items.iter().position(|&item| item == id) {
            self.items.remove(position);
        }
    }

    /// Number of units of a product currently in the cart.
    #[must_use]
    pub fn item_count(&self, id: ProductId) -> u32 {
        let count = self.items.iter().filter(|&&item| item == id).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Total number of units across all products (the header badge value).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        u32::try_from(self.items.len()).unwrap_or(u32::MAX)
    }

    /// Whether the cart holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids currently represented, one entry per product.
    ///
    /// Ordered by first occurrence, so aggregated views keep the order in
    /// which the shopper picked things.
    #[must_use]
    pub fn distinct_product_ids(&self) -> Vec<ProductId> {
        let mut distinct = Vec::new();
        for &id in &self.items {
            if !distinct.contains(&id) {
                distinct.push(id);
            }
        }
        distinct
    }

    /// Aggregated lines - one per distinct product, in first-occurrence
    /// order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.distinct_product_ids()
            .into_iter()
            .map(|product_id| CartLine {
                product_id,
                quantity: self.item_count(product_id),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::{CurrencyCode, Price};

    fn test_catalog() -> Arc<Catalog> {
        let products = vec![
            product(1, "אגרטל גדול", 120, 5),
            product(2, "אגרטל קטן", 80, 3),
            product(3, "מעמד לשעון אפל", 50, 8),
            product(4, "מסדר כבלים", 30, 2),
        ];
        Arc::new(Catalog::new(products).unwrap())
    }

    fn product(id: i32, name: &str, price: u32, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            name_en: format!("Product {id}"),
            description: String::new(),
            image: String::new(),
            price: Price::from_units(price, CurrencyCode::ILS),
            stock,
        }
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new(test_catalog());
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.item_count(ProductId::new(1)), 0);
        assert_eq!(cart.available_stock(ProductId::new(1)), 5);
    }

    #[test]
    fn test_add_decrements_availability() {
        let mut cart = Cart::new(test_catalog());
        let id = ProductId::new(1);

        cart.add(id);
        cart.add(id);
        cart.add(id);

        assert_eq!(cart.item_count(id), 3);
        assert_eq!(cart.available_stock(id), 2);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_add_refused_once_stock_exhausted() {
        let mut cart = Cart::new(test_catalog());
        let id = ProductId::new(4); // stock 2

        cart.add(id);
        cart.add(id);
        assert_eq!(cart.available_stock(id), 0);

        // Third add is a silent no-op.
        cart.add(id);
        assert_eq!(cart.item_count(id), 2);
        assert_eq!(cart.available_stock(id), 0);
    }

    #[test]
    fn test_add_unknown_id_is_noop() {
        let mut cart = Cart::new(test_catalog());
        let unknown = ProductId::new(99);

        cart.add(unknown);
        assert!(cart.is_empty());
        assert_eq!(cart.available_stock(unknown), 0);
    }

    #[test]
    fn test_remove_takes_exactly_one_unit() {
        let mut cart = Cart::new(test_catalog());
        let id = ProductId::new(3);

        cart.add(id);
        cart.add(id);
        cart.remove(id);

        assert_eq!(cart.item_count(id), 1);
        assert_eq!(cart.available_stock(id), 7);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new(test_catalog());
        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());

        cart.add(ProductId::new(2));
        cart.remove(ProductId::new(1));
        assert_eq!(cart.item_count(ProductId::new(2)), 1);
    }

    #[test]
    fn test_availability_identity_holds() {
        let mut cart = Cart::new(test_catalog());
        cart.add(ProductId::new(1));
        cart.add(ProductId::new(2));
        cart.add(ProductId::new(1));

        for id in [1, 2, 3, 4].map(ProductId::new) {
            let stock = cart.catalog().stock(id);
            assert_eq!(cart.available_stock(id), stock - cart.item_count(id));
        }
    }

    #[test]
    fn test_round_trip_restores_availability() {
        let mut cart = Cart::new(test_catalog());
        let ids = [1, 1, 2, 4, 1].map(ProductId::new);

        for id in ids {
            cart.add(id);
        }
        for id in ids {
            cart.remove(id);
        }

        assert!(cart.is_empty());
        for id in [1, 2, 3, 4].map(ProductId::new) {
            assert_eq!(cart.available_stock(id), cart.catalog().stock(id));
        }
    }

    #[test]
    fn test_distinct_ids_keep_first_occurrence_order() {
        let mut cart = Cart::new(test_catalog());
        for id in [3, 1, 3, 2, 1].map(ProductId::new) {
            cart.add(id);
        }

        assert_eq!(
            cart.distinct_product_ids(),
            [3, 1, 2].map(ProductId::new).to_vec()
        );
    }

    #[test]
    fn test_lines_aggregate_quantities() {
        let mut cart = Cart::new(test_catalog());
        for id in [1, 2, 1, 1].map(ProductId::new) {
            cart.add(id);
        }

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines.first().unwrap(),
            &CartLine {
                product_id: ProductId::new(1),
                quantity: 3
            }
        );
        assert_eq!(
            lines.get(1).unwrap(),
            &CartLine {
                product_id: ProductId::new(2),
                quantity: 1
            }
        );
    }
}
