//! Catalog product record.
//!
//! Products are read-only reference records owned by the external catalog
//! collaborator. The core never mutates them; it validates their shape
//! once at the loading boundary and treats the collection as an immutable
//! snapshot afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Errors that can occur when validating a [`Product`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductError {
    /// The product identifier is empty.
    #[error("product id cannot be empty")]
    EmptyId,
    /// The product name is empty.
    #[error("product '{id}' has an empty name")]
    EmptyName {
        /// Identifier of the offending record.
        id: String,
    },
    /// The product price is negative.
    #[error("product '{id}' has a negative price ({amount})")]
    NegativePrice {
        /// Identifier of the offending record.
        id: String,
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A purchasable product.
///
/// ## Constraints
///
/// - `id` must be non-empty and unique within a catalog
/// - `name` must be non-empty
/// - `price.amount` must be non-negative
///
/// Uniqueness is checked by the catalog loader, which sees the whole
/// collection; [`Product::validate`] checks the per-record constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned by the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text description, searched alongside the name.
    pub description: String,
    /// Current catalog price. Cart lines snapshot this at add time.
    pub price: Price,
    /// Image URL or path for display.
    pub image: String,
    /// Category label (e.g. "Drinks"). Matched exactly by the filter.
    pub category: String,
}

impl Product {
    /// Validate the per-record shape constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty, or the price is
    /// negative.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.as_str().is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName {
                id: self.id.as_str().to_owned(),
            });
        }
        if self.price.amount.is_sign_negative() && !self.price.amount.is_zero() {
            return Err(ProductError::NegativePrice {
                id: self.id.as_str().to_owned(),
                amount: self.price.amount,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn product(id: &str, name: &str, amount: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: String::new(),
            price: Price::new(Decimal::from(amount), CurrencyCode::MAD),
            image: String::new(),
            category: "Drinks".to_owned(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(product("1", "Orange Juice", 15).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_price_ok() {
        assert!(product("1", "Sample", 0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_id() {
        let err = product("", "Orange Juice", 15).validate().unwrap_err();
        assert!(matches!(err, ProductError::EmptyId));
    }

    #[test]
    fn test_validate_empty_name() {
        let err = product("1", "", 15).validate().unwrap_err();
        assert!(matches!(err, ProductError::EmptyName { .. }));
    }

    #[test]
    fn test_validate_negative_price() {
        let err = product("1", "Orange Juice", -5).validate().unwrap_err();
        assert!(matches!(err, ProductError::NegativePrice { .. }));
    }
}
