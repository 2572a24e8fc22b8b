//! Per-run session wiring.
//!
//! A [`StoreSession`] is constructed once per application run and passed
//! by reference to views. It owns the configuration, the loaded catalog
//! snapshot and the cart store — there are no global singletons; the
//! single-instance semantics come from there being exactly one session.

use crate::cart::CartStore;
use crate::catalog::{Catalog, CatalogError, CatalogQuery};
use crate::config::StoreConfig;
use crate::persist::JsonFileStorage;

/// Everything one storefront run needs, wired together.
pub struct StoreSession {
    config: StoreConfig,
    catalog: Catalog,
    cart: CartStore,
}

impl StoreSession {
    /// Create a session: load the catalog snapshot and restore the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or fails
    /// validation. A broken persisted cart is NOT an error; the cart
    /// store recovers to empty on its own.
    pub fn new(config: StoreConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(&config.catalog_path)?;
        let storage = JsonFileStorage::new(config.cart_path.clone());
        let cart = CartStore::new(Box::new(storage));

        Ok(Self {
            config,
            catalog,
            cart,
        })
    }

    /// Create a session around an already-built catalog and cart.
    ///
    /// Lets callers substitute storage (e.g. in-memory) or a fixture
    /// catalog.
    #[must_use]
    pub const fn from_parts(config: StoreConfig, catalog: Catalog, cart: CartStore) -> Self {
        Self {
            config,
            catalog,
            cart,
        }
    }

    /// A fresh query sized from this session's configuration.
    #[must_use]
    pub fn new_query(&self) -> CatalogQuery {
        CatalogQuery::new(self.config.page_size)
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get a reference to the catalog snapshot.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart store.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }
}
