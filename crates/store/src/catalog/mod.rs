//! Catalog store.
//!
//! Loads the product collection and category labels supplied by the
//! external catalog collaborator and holds them in memory as an immutable
//! snapshot. Shape violations (duplicate ids, empty names, negative
//! prices) are rejected here, at the boundary; the query pipeline assumes
//! well-formed records.

mod query;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shorefront_core::{Product, ProductError, ProductId};
use tracing::{info, warn};

pub use query::{CatalogPage, CatalogQuery, SortDirection, SortKey};

/// The category label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Errors that can occur when loading or saving a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ProductError),
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
}

/// File format shared with the catalog collaborator.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<String>,
}

/// Immutable catalog snapshot.
///
/// The collection does not mutate for the lifetime of the process; every
/// query runs against the same records.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// Load and validate a catalog from its JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// record violates the shape constraints.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw)?;
        let catalog = Self::from_parts(file.products, file.categories)?;
        info!(
            path = ?path,
            products = catalog.products.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-fetched collections.
    ///
    /// This is the seam for any other collaborator (a remote fetch, test
    /// fixtures); the same boundary validation applies. The category list
    /// always ends up led by the `"All"` sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error on the first record that fails validation or
    /// repeats an id.
    pub fn from_parts(
        products: Vec<Product>,
        mut categories: Vec<String>,
    ) -> Result<Self, CatalogError> {
        {
            let mut seen: HashSet<&ProductId> = HashSet::new();
            for product in &products {
                product.validate()?;
                if !seen.insert(&product.id) {
                    return Err(CatalogError::DuplicateId(product.id.to_string()));
                }
            }
        }

        for product in &products {
            if !product.category.is_empty() && !categories.iter().any(|c| c == &product.category) {
                warn!(
                    product_id = %product.id,
                    category = %product.category,
                    "Product references a category missing from the label list"
                );
            }
        }

        if categories.first().map(String::as_str) != Some(ALL_CATEGORIES) {
            categories.retain(|c| c != ALL_CATEGORIES);
            categories.insert(0, ALL_CATEGORIES.to_owned());
        }

        Ok(Self {
            products,
            categories,
        })
    }

    /// Serialize this catalog to the collaborator's JSON file format.
    ///
    /// Used by seeding tools; [`Catalog::load`] is the inverse.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let file = CatalogFile {
            products: self.products.clone(),
            categories: self.categories.clone(),
        };
        let raw = serde_json::to_string_pretty(&file)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category labels, starting with `"All"`.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
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

    /// Run a query against this catalog's product snapshot.
    #[must_use]
    pub fn query(&self, query: &CatalogQuery) -> CatalogPage {
        query::run(&self.products, query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shorefront_core::{CurrencyCode, Price};

    use super::*;

    fn product(id: &str, name: &str, amount: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: String::new(),
            price: Price::new(Decimal::from(amount), CurrencyCode::MAD),
            image: String::new(),
            category: category.to_owned(),
        }
    }

    #[test]
    fn test_from_parts_accepts_valid_collection() {
        let catalog = Catalog::from_parts(
            vec![
                product("1", "Orange Juice", 15, "Drinks"),
                product("2", "Chips", 10, "Snacks"),
            ],
            vec![
                "All".to_owned(),
                "Drinks".to_owned(),
                "Snacks".to_owned(),
            ],
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories().first().unwrap(), "All");
    }

    #[test]
    fn test_from_parts_rejects_duplicate_ids() {
        let err = Catalog::from_parts(
            vec![
                product("1", "Orange Juice", 15, "Drinks"),
                product("1", "Soda Can", 12, "Drinks"),
            ],
            Vec::new(),
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_from_parts_rejects_invalid_record() {
        let err = Catalog::from_parts(
            vec![product("1", "", 15, "Drinks")],
            Vec::new(),
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_from_parts_prepends_all_sentinel() {
        let catalog = Catalog::from_parts(
            vec![product("1", "Orange Juice", 15, "Drinks")],
            vec!["Drinks".to_owned()],
        )
        .unwrap();

        assert_eq!(
            catalog.categories(),
            &["All".to_owned(), "Drinks".to_owned()]
        );
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::from_parts(
            vec![product("1", "Orange Juice", 15, "Drinks")],
            Vec::new(),
        )
        .unwrap();

        assert!(catalog.product(&ProductId::new("1")).is_some());
        assert!(catalog.product(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let catalog = Catalog::from_parts(
            vec![
                product("1", "Orange Juice", 15, "Drinks"),
                product("2", "Chips", 10, "Snacks"),
            ],
            vec!["All".to_owned(), "Drinks".to_owned(), "Snacks".to_owned()],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "shorefront-catalog-{}.json",
            std::process::id()
        ));
        catalog.save(&path).unwrap();
        let restored = Catalog::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored.products(), catalog.products());
        assert_eq!(restored.categories(), catalog.categories());
    }
}
