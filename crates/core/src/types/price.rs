//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are whole currency units (shekels, dollars), not minor units.
/// The catalog is currency-agnostic at the unit level; the currency code
/// travels with the price so the checkout hand-off can name it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., shekels, not agorot).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: u32, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::from(units),
            currency_code,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount)
    }
}

/// Error parsing a [`CurrencyCode`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported currency code: {0}")]
pub struct ParseCurrencyError(pub String);

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    ILS,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// The ISO 4217 alphabetic code, as payment providers expect it.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ILS => "ILS",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }

    /// The display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::ILS => "₪",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ILS" => Ok(Self::ILS),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            other => Err(ParseCurrencyError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let price = Price::from_units(120, CurrencyCode::ILS);
        assert_eq!(price.amount, Decimal::from(120));
        assert_eq!(price.currency_code, CurrencyCode::ILS);
    }

    #[test]
    fn test_display_uses_symbol() {
        let price = Price::from_units(80, CurrencyCode::ILS);
        assert_eq!(price.to_string(), "₪80");
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("ils".parse::<CurrencyCode>().unwrap(), CurrencyCode::ILS);
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_currency_code_roundtrip() {
        for code in [
            CurrencyCode::ILS,
            CurrencyCode::USD,
            CurrencyCode::EUR,
            CurrencyCode::GBP,
        ] {
            assert_eq!(code.code().parse::<CurrencyCode>().unwrap(), code);
        }
    }
}
