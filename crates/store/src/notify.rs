//! User-facing cart notifications.
//!
//! Cart mutations return a [`CartEvent`] describing what happened; the
//! view layer decides how to present it (the CLI prints it, a GUI could
//! toast it). The core never talks to a UI directly.

use core::fmt;

/// Outcome of a cart mutation, suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended with quantity 1.
    ItemAdded {
        /// Display name of the added product.
        name: String,
    },
    /// An existing line's quantity went up by one.
    QuantityIncreased {
        /// Display name of the product.
        name: String,
        /// The new quantity.
        quantity: u32,
    },
    /// A line's quantity was set explicitly.
    QuantityChanged {
        /// The new quantity.
        quantity: u32,
    },
    /// A line was removed (or a quantity update reached zero).
    ItemRemoved,
    /// The whole cart was emptied.
    Cleared,
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemAdded { name } => write!(f, "Added {name} to the cart"),
            Self::QuantityIncreased { name, quantity } => {
                write!(f, "Increased {name} to {quantity} in the cart")
            }
            Self::QuantityChanged { quantity } => write!(f, "Quantity set to {quantity}"),
            Self::ItemRemoved => write!(f, "Removed item from the cart"),
            Self::Cleared => write!(f, "Cart emptied"),
        }
    }
}
