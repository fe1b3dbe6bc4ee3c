//! Catalog loading.
//!
//! The catalog is loaded exactly once at startup: from a JSON file when
//! `STOREFRONT_CATALOG_PATH` is set, otherwise from the built-in seed (the
//! shop's four stock products). Wire records keep prices as whole currency
//! units; the configured currency is applied during conversion so the file
//! stays currency-agnostic.

use std::path::Path;

use serde::Deserialize;

use madpis3d_core::types::{CurrencyCode, Price, ProductId};
use madpis3d_core::{Catalog, CatalogError, Product};

use crate::config::StorefrontConfig;

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog file: {0}")]
    Io(String),
    /// The catalog file is not valid JSON of the expected shape.
    #[error("failed to parse catalog file: {0}")]
    Parse(String),
    /// The file parsed but describes an invalid catalog.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Wire format of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductRecord>,
}

/// Wire format of a single product entry.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: i32,
    name: String,
    #[serde(default)]
    name_en: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    /// Whole currency units; the configured currency is applied on load.
    price: u32,
    stock: u32,
}

impl ProductRecord {
    fn into_product(self, currency: CurrencyCode) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            name_en: self.name_en,
            description: self.description,
            image: self.image,
            price: Price::from_units(self.price, currency),
            stock: self.stock,
        }
    }
}

/// Load the catalog per configuration.
///
/// # Errors
///
/// Returns `CatalogLoadError` if the configured file cannot be read or
/// parsed, or if the product list is invalid (duplicate ids).
pub fn load(config: &StorefrontConfig) -> Result<Catalog, CatalogLoadError> {
    match &config.catalog_path {
        Some(path) => load_file(path, config.currency),
        None => Ok(seed_catalog(config.currency)?),
    }
}

/// Load and convert a JSON catalog file.
fn load_file(path: &Path, currency: CurrencyCode) -> Result<Catalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|e| CatalogLoadError::Io(e.to_string()))?;
    let catalog = parse_catalog(&raw, currency)?;
    tracing::info!(products = catalog.len(), path = %path.display(), "Catalog loaded");
    Ok(catalog)
}

/// Parse a JSON catalog document.
fn parse_catalog(raw: &str, currency: CurrencyCode) -> Result<Catalog, CatalogLoadError> {
    let file: CatalogFile =
        serde_json::from_str(raw).map_err(|e| CatalogLoadError::Parse(e.to_string()))?;
    let products = file
        .products
        .into_iter()
        .map(|record| record.into_product(currency))
        .collect();
    Ok(Catalog::new(products)?)
}

/// The built-in seed catalog: the shop's four stock products.
fn seed_catalog(currency: CurrencyCode) -> Result<Catalog, CatalogError> {
    let records = [
        (
            1,
            "אגרטל גדול",
            "Large Vase",
            "אגרטל מודפס תלת מימד באיכות גבוהה, מושלם לסלון או למרפסת",
            "/images/large_vase.png",
            120,
            5,
        ),
        (
            2,
            "אגרטל קטן",
            "Small Vase",
            "אגרטל קומפקטי ומעוצב, אידיאלי לשולחן העבודה או המטבח",
            "/images/small_vase.JPG",
            80,
            3,
        ),
        (
            3,
            "מעמד לשעון אפל",
            "Apple Watch Stand",
            "מעמד מינימליסטי ואלגנטי לשעון החכם שלך",
            "/images/apple_watch_stand.jpg",
            50,
            8,
        ),
        (
            4,
            "מסדר כבלים",
            "Cable Organizer",
            "פתרון חכם לניהול כבלים בשולחן העבודה",
            "/images/cable_organizer.jpg",
            30,
            2,
        ),
    ];

    let products = records
        .into_iter()
        .map(|(id, name, name_en, description, image, price, stock)| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            name_en: name_en.to_owned(),
            description: description.to_owned(),
            image: image.to_owned(),
            price: Price::from_units(price, currency),
            stock,
        })
        .collect();

    Catalog::new(products)
}
