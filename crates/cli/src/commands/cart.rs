//! Cart commands.
//!
//! Each command restores the persisted cart, applies one mutation (or
//! renders the contents), and prints the event the store returned.

use shorefront_core::ProductId;
use shorefront_store::cart::CartStore;
use shorefront_store::catalog::Catalog;
use shorefront_store::config::StoreConfig;
use shorefront_store::persist::JsonFileStorage;

/// Restore the persisted cart for this configuration.
fn open_cart(config: &StoreConfig) -> CartStore {
    CartStore::new(Box::new(JsonFileStorage::new(config.cart_path.clone())))
}

/// Print the one-line cart summary shown after every mutation.
fn print_summary(cart: &CartStore) {
    println!("{} item(s) in cart, total {}", cart.item_count(), cart.total());
}

/// Add one unit of a catalog product to the cart.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the product id
/// is not in the catalog.
pub fn add(product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    let id = ProductId::from(product_id);
    let Some(product) = catalog.product(&id) else {
        return Err(format!("no product with id {product_id} in the catalog").into());
    };

    let mut cart = open_cart(&config);
    let event = cart.add(product);
    println!("{event}");
    print_summary(&cart);
    Ok(())
}

/// Set the quantity of a cart line; 0 removes it.
///
/// # Errors
///
/// Returns an error if configuration is invalid.
pub fn set_quantity(product_id: &str, quantity: i64) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let mut cart = open_cart(&config);

    let event = cart.update_quantity(&ProductId::from(product_id), quantity);
    println!("{event}");
    print_summary(&cart);
    Ok(())
}

/// Remove a line from the cart.
///
/// # Errors
///
/// Returns an error if configuration is invalid.
pub fn remove(product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let mut cart = open_cart(&config);

    let event = cart.remove(&ProductId::from(product_id));
    println!("{event}");
    print_summary(&cart);
    Ok(())
}

/// Show cart contents and the running total.
///
/// # Errors
///
/// Returns an error if configuration is invalid.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let cart = open_cart(&config);

    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "  [{}] {} x{} @ {} = {}",
            line.product_id,
            line.name,
            line.quantity,
            line.price,
            line.line_total()
        );
    }
    println!();
    print_summary(&cart);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if configuration is invalid.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let mut cart = open_cart(&config);

    let event = cart.clear();
    println!("{event}");
    Ok(())
}
