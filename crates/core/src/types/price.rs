//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts use decimal arithmetic so cart totals never accumulate binary
/// floating-point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dirhams, not centimes).
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

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// This price multiplied by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }

    /// This price plus another amount in the same currency.
    ///
    /// The left-hand currency wins; the core never mixes currencies within
    /// one catalog, so no conversion is attempted.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            amount: self.amount + other.amount,
            currency_code: self.currency_code,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Dirham prices read amount-first ("15 DH"); others symbol-first.
        match self.currency_code {
            CurrencyCode::MAD => write!(f, "{} DH", self.amount.normalize()),
            code => write!(f, "{}{}", code.symbol(), self.amount.round_dp(2)),
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Moroccan dirham.
    #[default]
    MAD,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::MAD => "DH",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MAD => "MAD",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_times_quantity() {
        let price = Price::new(Decimal::from(20), CurrencyCode::MAD);
        assert_eq!(price.times(3).amount, Decimal::from(60));
    }

    #[test]
    fn test_price_plus() {
        let a = Price::new(Decimal::from(15), CurrencyCode::MAD);
        let b = Price::new(Decimal::from(10), CurrencyCode::MAD);
        assert_eq!(a.plus(&b).amount, Decimal::from(25));
    }

    #[test]
    fn test_price_display_dirham_suffix() {
        let price = Price::new(Decimal::from(15), CurrencyCode::MAD);
        assert_eq!(price.to_string(), "15 DH");
    }

    #[test]
    fn test_price_display_symbol_prefix() {
        let price = Price::new(Decimal::new(1999, 2), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$19.99");
    }

    #[test]
    fn test_zero_price() {
        assert_eq!(Price::zero(CurrencyCode::MAD).amount, Decimal::ZERO);
    }
}
