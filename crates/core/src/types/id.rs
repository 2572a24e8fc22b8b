//! Newtype ID for type-safe product references.
//!
//! Catalog records carry string identifiers assigned by the external
//! catalog collaborator. Wrapping them prevents accidentally mixing a
//! product id with any other string (search terms, category labels).

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product identifier.
///
/// Identifiers are opaque strings owned by the catalog; the cart only
/// ever compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_equality() {
        assert_eq!(ProductId::new("1"), ProductId::from("1"));
        assert_ne!(ProductId::new("1"), ProductId::new("2"));
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new("abc-123").to_string(), "abc-123");
    }
}
