//! Catalog query pipeline.
//!
//! Transforms the flat product snapshot plus a query specification into
//! the exact slice of results a view should render: filter, stable sort,
//! paginate. Pure, synchronous, recomputed per render.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shorefront_core::Product;

use super::ALL_CATEGORIES;

/// Sort key for catalog queries.
///
/// Text keys compare case-insensitively; price compares numerically.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Category,
}

impl SortKey {
    /// Parse from a URL or CLI parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price" => Self::Price,
            "category" => Self::Category,
            _ => Self::Name,
        }
    }

    /// Convert to a parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Category => "category",
        }
    }
}

/// Sort direction. Flips the comparison, not the input order, so ties
/// keep their catalog order either way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse from a URL or CLI parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// Convert to a parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// The filter+sort+pagination specification applied for one render.
///
/// Setter methods for the filter stages reset the page to 1: any change
/// to category, price bounds, search term, or sort invalidates the
/// current page position. Use [`CatalogQuery::set_page`] afterwards to
/// navigate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    category: String,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    search: String,
    sort_key: SortKey,
    direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl CatalogQuery {
    /// A query matching everything, sorted by name, on page 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            category: ALL_CATEGORIES.to_owned(),
            min_price: None,
            max_price: None,
            search: String::new(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Set the category filter. `"All"` matches every product.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    /// Set the inclusive price bounds. `None` leaves that side open.
    pub fn set_price_range(&mut self, min: Option<Decimal>, max: Option<Decimal>) {
        self.min_price = min;
        self.max_price = max;
        self.page = 1;
    }

    /// Set the free-text search term, matched case-insensitively against
    /// product names and descriptions.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Set the sort key and direction.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.direction = direction;
        self.page = 1;
    }

    /// Navigate to a page (1-based; 0 is treated as 1).
    ///
    /// Pages past the end of the result set are allowed and yield an
    /// empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The current category filter.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The current search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The fixed page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a product passes every filter stage.
    fn matches(&self, product: &Product) -> bool {
        if self.category != ALL_CATEGORIES && product.category != self.category {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price.amount < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price.amount > max
        {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
    }
}

/// A rendered page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// Products on this page, in sorted order.
    pub items: Vec<Product>,
    /// Products matching the filter stages, across all pages.
    pub total_matches: usize,
    /// Total page count; never less than 1, even for zero matches.
    pub total_pages: usize,
    /// The 1-based page this slice corresponds to.
    pub page: usize,
    /// The page size the slice was cut with.
    pub page_size: usize,
}

impl CatalogPage {
    /// 1-based index range of this slice within the full match set,
    /// for "showing X-Y of N" style display. `(0, 0)` for an empty page.
    #[must_use]
    pub fn display_range(&self) -> (usize, usize) {
        if self.items.is_empty() {
            return (0, 0);
        }
        let first = (self.page - 1) * self.page_size + 1;
        (first, first + self.items.len() - 1)
    }
}

/// Run the filter -> sort -> paginate pipeline over a product snapshot.
#[must_use]
pub fn run(products: &[Product], query: &CatalogQuery) -> CatalogPage {
    let mut matches: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();

    // Vec::sort_by is stable: equal keys keep their catalog order.
    matches.sort_by(|a, b| {
        let ordering = match query.sort_key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortKey::Price => a.price.amount.cmp(&b.price.amount),
        };
        match query.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(query.page_size).max(1);

    let start = (query.page - 1).saturating_mul(query.page_size);
    let items = matches
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .cloned()
        .collect();

    CatalogPage {
        items,
        total_matches,
        total_pages,
        page: query.page,
        page_size: query.page_size,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shorefront_core::{CurrencyCode, Price, ProductId};

    use super::*;

    fn product(id: &str, name: &str, description: &str, amount: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            price: Price::new(Decimal::from(amount), CurrencyCode::MAD),
            image: String::new(),
            category: category.to_owned(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("1", "Orange Juice", "Freshly squeezed", 15, "Drinks"),
            product("2", "Chips", "Salty and crispy", 10, "Snacks"),
            product("3", "Soda Can", "Cold and fizzy", 12, "Drinks"),
            product("4", "Mango Sorbet", "Tropical and light", 22, "Ice Cream"),
            product("5", "Sunglasses", "UV protection", 50, "Beach Accessories"),
        ]
    }

    fn ids(page: &CatalogPage) -> Vec<&str> {
        page.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_category_filter_matches_only_that_category() {
        let products = fixture();
        let mut query = CatalogQuery::new(10);
        query.set_category("Drinks");

        let page = run(&products, &query);

        assert_eq!(page.total_matches, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(ids(&page), vec!["1", "3"]);
    }

    #[test]
    fn test_all_category_matches_everything() {
        let products = fixture();
        let query = CatalogQuery::new(10);

        let page = run(&products, &query);

        assert_eq!(page.total_matches, products.len());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = fixture();
        let mut query = CatalogQuery::new(10);
        query.set_price_range(Some(Decimal::from(10)), Some(Decimal::from(15)));

        let page = run(&products, &query);

        // 10, 12 and 15 all inside; 22 and 50 out
        assert_eq!(page.total_matches, 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let products = fixture();
        let mut query = CatalogQuery::new(10);

        query.set_search("JUICE");
        assert_eq!(ids(&run(&products, &query)), vec!["1"]);

        // "crispy" only appears in a description
        query.set_search("crispy");
        assert_eq!(ids(&run(&products, &query)), vec!["2"]);
    }

    #[test]
    fn test_sort_by_price_ascending_and_descending() {
        let products = fixture();
        let mut query = CatalogQuery::new(10);

        query.set_sort(SortKey::Price, SortDirection::Ascending);
        assert_eq!(ids(&run(&products, &query)), vec!["2", "3", "1", "4", "5"]);

        query.set_sort(SortKey::Price, SortDirection::Descending);
        assert_eq!(ids(&run(&products, &query)), vec!["5", "4", "1", "3", "2"]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let products = vec![
            product("1", "banana split", "", 20, "Ice Cream"),
            product("2", "Apple Juice", "", 15, "Drinks"),
        ];
        let mut query = CatalogQuery::new(10);
        query.set_sort(SortKey::Name, SortDirection::Ascending);

        assert_eq!(ids(&run(&products, &query)), vec!["2", "1"]);
    }

    #[test]
    fn test_equal_keys_keep_catalog_order() {
        let products = vec![
            product("1", "Chips", "", 10, "Snacks"),
            product("2", "Popcorn", "", 10, "Snacks"),
            product("3", "Pretzel", "", 10, "Snacks"),
        ];
        let mut query = CatalogQuery::new(10);

        query.set_sort(SortKey::Price, SortDirection::Ascending);
        assert_eq!(ids(&run(&products, &query)), vec!["1", "2", "3"]);

        // Flipping the direction must not reorder ties
        query.set_sort(SortKey::Price, SortDirection::Descending);
        assert_eq!(ids(&run(&products, &query)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_pages_partition_the_match_set() {
        let products = fixture();
        let mut query = CatalogQuery::new(2);

        let mut seen = Vec::new();
        let first = run(&products, &query);
        assert_eq!(first.total_pages, 3);

        for page_no in 1..=first.total_pages {
            query.set_page(page_no);
            let page = run(&products, &query);
            for item in &page.items {
                assert!(!seen.contains(&item.id), "product on two pages");
                seen.push(item.id.clone());
            }
        }

        assert_eq!(seen.len(), first.total_matches);
    }

    #[test]
    fn test_page_beyond_end_is_empty_not_an_error() {
        let products = fixture();
        let mut query = CatalogQuery::new(2);
        query.set_page(99);

        let page = run(&products, &query);

        assert!(page.items.is_empty());
        assert_eq!(page.total_matches, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_empty_catalog_yields_one_empty_page() {
        let query = CatalogQuery::new(10);
        let page = run(&[], &query);

        assert_eq!(page.total_matches, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.display_range(), (0, 0));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = CatalogQuery::new(2);
        query.set_page(3);
        assert_eq!(query.page(), 3);

        query.set_search("nothing-matches-this");
        assert_eq!(query.page(), 1);

        query.set_page(2);
        query.set_category("Drinks");
        assert_eq!(query.page(), 1);

        query.set_page(2);
        query.set_price_range(None, Some(Decimal::from(20)));
        assert_eq!(query.page(), 1);

        query.set_page(2);
        query.set_sort(SortKey::Price, SortDirection::Descending);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_non_matching_search_drives_matches_to_zero_on_page_one() {
        let products = fixture();
        let mut query = CatalogQuery::new(2);
        query.set_page(3);
        query.set_search("zzz-no-such-product");

        let page = run(&products, &query);

        assert_eq!(page.total_matches, 0);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_drinks_scenario() {
        let products = vec![
            product("1", "Orange Juice", "", 15, "Drinks"),
            product("2", "Chips", "", 10, "Snacks"),
        ];
        let mut query = CatalogQuery::new(10);
        query.set_category("Drinks");

        let page = run(&products, &query);

        assert_eq!(page.total_matches, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(ids(&page), vec!["1"]);
    }

    #[test]
    fn test_display_range() {
        let products = fixture();
        let mut query = CatalogQuery::new(2);

        query.set_page(1);
        assert_eq!(run(&products, &query).display_range(), (1, 2));

        query.set_page(3);
        assert_eq!(run(&products, &query).display_range(), (5, 5));
    }
}
