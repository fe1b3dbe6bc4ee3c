//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_PAYPAL_BUSINESS` - PayPal business account receiving payments
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - JSON catalog file (default: built-in seed)
//! - `STOREFRONT_CURRENCY` - ISO 4217 currency code (default: ILS)
//! - `STOREFRONT_SHIPPING_COST` - Flat shipping fee (default: 25)
//! - `STOREFRONT_FREE_SHIPPING_THRESHOLD` - Subtotal waiving shipping (default: 150)
//! - `STOREFRONT_PAYPAL_ENDPOINT` - Hosted checkout endpoint
//!   (default: <https://www.paypal.com/cgi-bin/webscr>)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

use madpis3d_core::pricing::{DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_SHIPPING_COST};
use madpis3d_core::types::CurrencyCode;
use madpis3d_core::ShippingPolicy;

/// Default PayPal hosted checkout endpoint (`_xclick` flow).
pub const DEFAULT_PAYPAL_ENDPOINT: &str = "https://www.paypal.com/cgi-bin/webscr";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Optional path to a JSON catalog file; the built-in seed otherwise
    pub catalog_path: Option<PathBuf>,
    /// Currency the shop trades in
    pub currency: CurrencyCode,
    /// Shipping fee and free-shipping threshold
    pub shipping: ShippingPolicy,
    /// PayPal checkout hand-off configuration
    pub paypal: PayPalConfig,
}

/// PayPal hosted-checkout configuration.
///
/// The business address is the only identifier the `_xclick` flow needs;
/// it is public by design (it appears verbatim in the redirect URL).
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// Hosted checkout endpoint
    pub endpoint: String,
    /// Business account receiving payments
    pub business: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or any
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))?;
        let catalog_path = get_optional_env("STOREFRONT_CATALOG_PATH").map(PathBuf::from);
        let currency = get_env_or_default("STOREFRONT_CURRENCY", CurrencyCode::default().code())
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_CURRENCY".to_string(), e.to_string())
            })?;
        let shipping = shipping_policy_from_env()?;
        let paypal = PayPalConfig::from_env()?;

        Ok(Self {
            host,
            port,
            catalog_path,
            currency,
            shipping,
            paypal,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl PayPalConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: get_env_or_default("STOREFRONT_PAYPAL_ENDPOINT", DEFAULT_PAYPAL_ENDPOINT),
            business: get_required_env("STOREFRONT_PAYPAL_BUSINESS")?,
        })
    }
}

fn shipping_policy_from_env() -> Result<ShippingPolicy, ConfigError> {
    Ok(ShippingPolicy {
        shipping_cost: get_decimal_or_default("STOREFRONT_SHIPPING_COST", DEFAULT_SHIPPING_COST)?,
        free_shipping_threshold: get_decimal_or_default(
            "STOREFRONT_FREE_SHIPPING_THRESHOLD",
            DEFAULT_FREE_SHIPPING_THRESHOLD,
        )?,
    })
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable as a `Decimal`, with a whole-unit default.
fn get_decimal_or_default(key: &str, default: u32) -> Result<Decimal, ConfigError> {
    match get_optional_env(key) {
        Some(raw) => raw
            .parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(Decimal::from(default)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog_path: None,
            currency: CurrencyCode::ILS,
            shipping: ShippingPolicy::default(),
            paypal: PayPalConfig {
                endpoint: DEFAULT_PAYPAL_ENDPOINT.to_string(),
                business: "madpis3d@gmail.com".to_string(),
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_default_shipping_policy_matches_shop_rule() {
        let config = test_config();
        assert_eq!(config.shipping.shipping_cost, Decimal::from(25));
        assert_eq!(config.shipping.free_shipping_threshold, Decimal::from(150));
    }
}
