//! Type-safe price representation using decimal arithmetic.
//!
//! Cart totals are derived from prices by exact decimal math, so `Price`
//! exposes the small set of operations the ledger needs (line extension,
//! zero) rather than general arithmetic across currencies.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
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

    /// Create a price from a whole number of currency units (e.g. dollars).
    #[must_use]
    pub fn from_major(units: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::from(units),
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// Extend this unit price over a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code for the currency.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let price = Price::from_major(45, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::from(45));
    }

    #[test]
    fn test_times_extends_line() {
        let price = Price::from_major(35, CurrencyCode::USD);
        assert_eq!(price.times(2).amount, Decimal::from(70));
    }

    #[test]
    fn test_times_zero_quantity() {
        let price = Price::from_major(35, CurrencyCode::USD);
        assert_eq!(price.times(0).amount, Decimal::ZERO);
    }

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::from_major(45, CurrencyCode::USD);
        assert_eq!(price.to_string(), "$45.00");

        let cents = Price::new(Decimal::new(1150, 2), CurrencyCode::USD);
        assert_eq!(cents.to_string(), "$11.50");
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(
            Price::from_major(10, CurrencyCode::EUR).to_string(),
            "\u{20ac}10.00"
        );
        assert_eq!(
            Price::from_major(10, CurrencyCode::GBP).to_string(),
            "\u{a3}10.00"
        );
    }

    #[test]
    fn test_zero() {
        let zero = Price::zero(CurrencyCode::USD);
        assert_eq!(zero.amount, Decimal::ZERO);
        assert_eq!(zero.to_string(), "$0.00");
    }
}
