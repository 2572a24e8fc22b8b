//! Seed the demo catalog.
//!
//! Writes the beach-kiosk demo catalog (ice cream, drinks, snacks,
//! fruits, beach accessories) to the configured catalog path, in the
//! same JSON format the catalog collaborator would supply.

use rust_decimal::Decimal;
use shorefront_core::{CurrencyCode, Price, Product, ProductId};
use shorefront_store::catalog::Catalog;
use shorefront_store::config::StoreConfig;
use tracing::info;

const DEMO_IMAGE: &str = "/pic/product1.jpg";

fn product(id: &str, name: &str, description: &str, amount: i64, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::new(Decimal::from(amount), CurrencyCode::MAD),
        image: DEMO_IMAGE.to_owned(),
        category: category.to_owned(),
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        // Ice Cream
        product("1", "Strawberry Ice Cream", "Delicious and refreshing", 20, "Ice Cream"),
        product("2", "Chocolate Cone", "Classic chocolate flavor", 25, "Ice Cream"),
        product("3", "Mango Sorbet", "Tropical and light", 22, "Ice Cream"),
        // Drinks
        product("4", "Cold Water Bottle", "500ml fresh cold water", 10, "Drinks"),
        product("5", "Orange Juice", "Freshly squeezed", 15, "Drinks"),
        product("6", "Soda Can", "Cold and fizzy", 12, "Drinks"),
        // Snacks
        product("7", "Potato Chips", "Salty and crispy", 10, "Snacks"),
        product("8", "Popcorn Cup", "Buttery goodness", 12, "Snacks"),
        product("9", "Mini Sandwich", "Tuna and lettuce", 18, "Snacks"),
        // Fruits
        product("10", "Fruit Salad Cup", "Mixed seasonal fruits", 17, "Fruits"),
        product("11", "Watermelon Slice", "Cold and juicy", 8, "Fruits"),
        // Beach Accessories
        product("12", "Sunglasses", "UV protection", 50, "Beach Accessories"),
        product("13", "Beach Hat", "Protects from sun", 35, "Beach Accessories"),
        product("14", "Inflatable Ring", "Fun for kids", 40, "Beach Accessories"),
    ]
}

fn demo_categories() -> Vec<String> {
    [
        "All",
        "Ice Cream",
        "Drinks",
        "Snacks",
        "Fruits",
        "Beach Accessories",
    ]
    .map(String::from)
    .to_vec()
}

/// Write the demo catalog to the configured path.
///
/// # Errors
///
/// Returns an error if the target file already exists (unless `force`),
/// or if the catalog cannot be validated or written.
pub fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;

    if config.catalog_path.exists() && !force {
        return Err(format!(
            "catalog file {} already exists (use --force to overwrite)",
            config.catalog_path.display()
        )
        .into());
    }

    let catalog = Catalog::from_parts(demo_products(), demo_categories())?;
    catalog.save(&config.catalog_path)?;

    info!(
        path = %config.catalog_path.display(),
        products = catalog.len(),
        "Demo catalog written"
    );
    println!(
        "Wrote {} products to {}",
        catalog.len(),
        config.catalog_path.display()
    );
    Ok(())
}
