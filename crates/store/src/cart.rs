//! Cart store.
//!
//! Holds the visitor's purchase intent as an ordered list of lines, keeps
//! it durable across sessions through the persistence port, and derives
//! totals from add-time price snapshots.
//!
//! Every operation is a synchronous in-memory mutation followed by one
//! persistence write. There are no error paths during normal operation:
//! a quantity of zero means "remove the line", an unknown product id is a
//! no-op, and a failed save is logged and swallowed.

use serde::{Deserialize, Serialize};
use shorefront_core::{CurrencyCode, Price, Product, ProductId};
use tracing::{debug, error, warn};

use crate::notify::CartEvent;
use crate::persist::CartStorage;

/// One product line inside the cart.
///
/// A line is a snapshot of the product record at the moment of adding:
/// later catalog price changes do not retroactively alter cart totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Identifier of the snapshotted product.
    pub product_id: ProductId,
    /// Display name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Image reference at add time.
    pub image: String,
    /// Always >= 1; a decrement to zero removes the line instead.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Price of the whole line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The cart store.
///
/// Owns the authoritative in-memory line collection (insertion order
/// preserved for display) and the persistence port it was constructed
/// with. Exactly one line exists per product id.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Create a store, restoring any persisted lines.
    ///
    /// Unreadable or unparsable persisted data is treated as an empty
    /// cart, never as a fatal error.
    #[must_use]
    pub fn new(storage: Box<dyn CartStorage>) -> Self {
        let lines = match storage.load() {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "Failed to restore cart, starting empty");
                Vec::new()
            }
        };
        Self { lines, storage }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line's quantity if the product is already
    /// in the cart, otherwise appends a new line with quantity 1. Always
    /// succeeds.
    pub fn add(&mut self, product: &Product) -> CartEvent {
        let event = if let Some(line) = self.line_mut(&product.id) {
            line.quantity += 1;
            CartEvent::QuantityIncreased {
                name: line.name.clone(),
                quantity: line.quantity,
            }
        } else {
            debug!(product_id = %product.id, "Adding new cart line");
            self.lines.push(CartLine::from_product(product));
            CartEvent::ItemAdded {
                name: product.name.clone(),
            }
        };
        self.persist();
        event
    }

    /// Set the quantity for a product line.
    ///
    /// A quantity of zero or below removes the line; setting a quantity
    /// for a product that is not in the cart is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> CartEvent {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        } else {
            debug!(product_id = %product_id, "Quantity update for product not in cart");
        }
        self.persist();
        CartEvent::QuantityChanged { quantity }
    }

    /// Remove the line for a product.
    ///
    /// A no-op (and no error) if the product is not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> CartEvent {
        self.lines.retain(|line| &line.product_id != product_id);
        self.persist();
        CartEvent::ItemRemoved
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) -> CartEvent {
        self.lines.clear();
        self.persist();
        CartEvent::Cleared
    }

    /// Sum of line price times quantity over all current lines.
    ///
    /// Uses the prices snapshotted at add time. An empty cart totals zero
    /// in the default currency.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |line| line.price.currency_code);
        self.lines
            .iter()
            .fold(Price::zero(currency), |total, line| {
                total.plus(&line.line_total())
            })
    }

    /// Number of items in the cart (sum of quantities), for the badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }

    /// Re-serialize the full collection through the port.
    ///
    /// Save failures are logged and swallowed; the in-memory cart stays
    /// authoritative for the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.lines) {
            error!(error = %e, "Failed to persist cart");
        }
    }
}
