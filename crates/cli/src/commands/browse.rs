//! Catalog browsing command.
//!
//! Runs one catalog query and renders the resulting page: the storefront
//! menu view, one page at a time.

use rust_decimal::Decimal;
use shorefront_store::catalog::{SortDirection, SortKey};
use shorefront_store::config::StoreConfig;
use shorefront_store::session::StoreSession;

/// Parsed `browse` arguments.
pub struct BrowseArgs {
    pub category: String,
    pub search: String,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: String,
    pub direction: String,
    pub page: usize,
}

/// Render one page of catalog query results.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the catalog cannot
/// be loaded.
pub fn run(args: &BrowseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let session = StoreSession::new(config)?;

    let mut query = session.new_query();
    query.set_category(&args.category);
    query.set_search(&args.search);
    query.set_price_range(args.min_price, args.max_price);
    query.set_sort(
        SortKey::parse(&args.sort),
        SortDirection::parse(&args.direction),
    );
    // Explicit page navigation comes after the filter setters, which
    // reset the position to page 1.
    query.set_page(args.page);

    let page = session.catalog().query(&query);

    if page.items.is_empty() {
        println!(
            "No products match this query (page {} of {}).",
            page.page, page.total_pages
        );
        return Ok(());
    }

    let (first, last) = page.display_range();
    println!(
        "Showing {first}-{last} of {} products (page {} of {})",
        page.total_matches, page.page, page.total_pages
    );
    println!();
    for product in &page.items {
        println!(
            "  [{}] {} - {} ({})",
            product.id, product.name, product.price, product.category
        );
        if !product.description.is_empty() {
            println!("      {}", product.description);
        }
    }

    Ok(())
}
