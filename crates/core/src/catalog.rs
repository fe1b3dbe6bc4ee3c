//! The immutable product catalog.
//!
//! The catalog is built once at process start and never mutated afterwards.
//! Everything stock-related that changes during a session is derived from
//! the cart, not written back here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Remaining stock at or below this count renders as a low-stock warning.
pub const LOW_STOCK_THRESHOLD: u32 = 3;

/// A purchasable product.
///
/// Immutable for the lifetime of a session. `stock` is the total on-hand
/// count; what a shopper can still add is [`Cart::available_stock`]
/// (stock minus units already reserved in the cart).
///
/// [`Cart::available_stock`]: crate::cart::Cart::available_stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Display name (Hebrew in the stock catalog).
    pub name: String,
    /// Latin-script name, used where the display name cannot render.
    pub name_en: String,
    pub description: String,
    /// Image path relative to the asset root.
    pub image: String,
    pub price: Price,
    /// Total on-hand stock count.
    pub stock: u32,
}

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),
}

/// The fixed list of purchasable products, indexed by id.
///
/// Construction validates id uniqueness; afterwards the catalog is
/// read-only and safe to share (`Arc<Catalog>`) across the whole app.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProductId`] if two products share
    /// an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products, index })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&pos| self.products.get(pos))
    }

    /// Total stock for a product; `0` for unknown ids.
    #[must_use]
    pub fn stock(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |product| product.stock)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Stock availability bucket for display.
///
/// Derived from *available* stock (total minus in-cart), so a product with
/// plenty on hand still shows as running out while a shopper's cart drains
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Nothing left to add; the add action is disabled.
    OutOfStock,
    /// 1 to [`LOW_STOCK_THRESHOLD`] units remaining, with the exact count.
    Low(u32),
    /// More than [`LOW_STOCK_THRESHOLD`] units remaining; no warning shown.
    InStock,
}

impl StockLevel {
    /// Classify a remaining-stock count.
    #[must_use]
    pub const fn for_remaining(remaining: u32) -> Self {
        match remaining {
            0 => Self::OutOfStock,
            n if n <= LOW_STOCK_THRESHOLD => Self::Low(n),
            _ => Self::InStock,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn product(id: i32, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("מוצר {id}"),
            name_en: format!("Product {id}"),
            description: String::new(),
            image: String::new(),
            price: Price::from_units(10, CurrencyCode::ILS),
            stock,
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![product(1, 5), product(2, 0)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.stock(ProductId::new(1)), 5);
        assert_eq!(catalog.stock(ProductId::new(2)), 0);
        assert!(catalog.get(ProductId::new(3)).is_none());
    }

    #[test]
    fn test_unknown_id_has_zero_stock() {
        let catalog = Catalog::new(vec![product(1, 5)]).unwrap();
        assert_eq!(catalog.stock(ProductId::new(99)), 0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![product(1, 5), product(1, 2)]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProductId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_stock_level_buckets() {
        assert_eq!(StockLevel::for_remaining(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::for_remaining(1), StockLevel::Low(1));
        assert_eq!(StockLevel::for_remaining(3), StockLevel::Low(3));
        assert_eq!(StockLevel::for_remaining(4), StockLevel::InStock);
        assert_eq!(StockLevel::for_remaining(100), StockLevel::InStock);
    }
}
