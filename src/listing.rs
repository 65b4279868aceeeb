//! Listing Utilities
//!
//! Filtering and category grouping for the product table.

use crate::models::Product;

/// View criteria applied to every product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub filter_text: String,
    pub in_stock_only: bool,
}

impl ListingFilter {
    pub fn new(filter_text: impl Into<String>, in_stock_only: bool) -> Self {
        Self {
            filter_text: filter_text.into(),
            in_stock_only,
        }
    }

    /// Case-insensitive name match plus the stock criterion
    pub fn matches(&self, product: &Product) -> bool {
        if self.in_stock_only && !product.stocked {
            return false;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.filter_text.to_lowercase())
    }
}

/// One row of the table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRow {
    Category(String),
    Product(Product),
}

/// Build table rows in a single pass.
/// Input must be sorted by category, otherwise headings repeat.
pub fn build_rows(products: &[Product], filter: &ListingFilter) -> Vec<ListingRow> {
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;

    for product in products {
        if !filter.matches(product) {
            continue;
        }
        if last_category != Some(product.category.as_str()) {
            rows.push(ListingRow::Category(product.category.clone()));
        }
        rows.push(ListingRow::Product(product.clone()));
        last_category = Some(product.category.as_str());
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_products;
    use proptest::prelude::*;

    impl ListingRow {
        /// Product rows only, in display order
        fn products(rows: &[ListingRow]) -> Vec<Product> {
            rows.iter()
                .filter_map(|row| match row {
                    ListingRow::Product(product) => Some(product.clone()),
                    ListingRow::Category(_) => None,
                })
                .collect()
        }
    }

    fn category(name: &str) -> ListingRow {
        ListingRow::Category(name.to_string())
    }

    fn names(rows: &[ListingRow]) -> Vec<String> {
        ListingRow::products(rows).into_iter().map(|p| p.name).collect()
    }

    fn category_runs(products: &[Product]) -> usize {
        if products.is_empty() {
            return 0;
        }
        1 + products
            .windows(2)
            .filter(|w| w[0].category != w[1].category)
            .count()
    }

    #[test]
    fn test_unfiltered_listing() {
        let rows = build_rows(&sample_products(), &ListingFilter::default());

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], category("Fruits"));
        assert_eq!(rows[4], category("Vegetables"));
        assert_eq!(
            names(&rows),
            ["Apple", "Dragonfruit", "Passionfruit", "Spinach", "Pumpkin", "Peas"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = build_rows(&sample_products(), &ListingFilter::new("FRUIT", false));

        assert_eq!(rows[0], category("Fruits"));
        assert_eq!(names(&rows), ["Dragonfruit", "Passionfruit"]);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_in_stock_only() {
        let rows = build_rows(&sample_products(), &ListingFilter::new("", true));

        assert_eq!(names(&rows), ["Apple", "Dragonfruit", "Spinach", "Peas"]);
        assert_eq!(rows.iter().filter(|r| matches!(r, ListingRow::Category(_))).count(), 2);
    }

    #[test]
    fn test_heading_dropped_when_category_empty() {
        // "pea" only matches a vegetable
        let rows = build_rows(&sample_products(), &ListingFilter::new("pea", false));

        assert_eq!(rows, vec![
            category("Vegetables"),
            ListingRow::Product(Product::new("Vegetables", "$1", true, "Peas")),
        ]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let rows = build_rows(&sample_products(), &ListingFilter::new("kiwi", false));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_unsorted_input_repeats_headings() {
        let products = vec![
            Product::new("Fruits", "$1", true, "Apple"),
            Product::new("Vegetables", "$2", true, "Spinach"),
            Product::new("Fruits", "$1", true, "Dragonfruit"),
        ];
        let rows = build_rows(&products, &ListingFilter::default());

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[4], category("Fruits"));
    }

    #[test]
    fn test_filter_matches_agrees_with_rows() {
        let filter = ListingFilter::new("p", true);
        let expected: Vec<String> = sample_products()
            .into_iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.name)
            .collect();

        assert_eq!(names(&build_rows(&sample_products(), &filter)), expected);
    }

    fn product_strategy() -> impl Strategy<Value = Product> {
        (
            prop::sample::select(vec!["Fruits", "Vegetables", "Dairy"]),
            "\\$[0-9]{1,2}",
            any::<bool>(),
            "[a-zA-Z]{0,6}",
        )
            .prop_map(|(category, price, stocked, name)| Product {
                category: category.to_string(),
                price,
                stocked,
                name,
            })
    }

    fn filter_strategy() -> impl Strategy<Value = ListingFilter> {
        ("[a-zA-Z]{0,2}", any::<bool>()).prop_map(|(text, stock)| ListingFilter::new(text, stock))
    }

    proptest! {
        #[test]
        fn prop_rows_satisfy_filter(
            products in prop::collection::vec(product_strategy(), 0..24),
            filter in filter_strategy(),
        ) {
            let rows = build_rows(&products, &filter);
            let needle = filter.filter_text.to_lowercase();
            for product in ListingRow::products(&rows) {
                prop_assert!(product.name.to_lowercase().contains(&needle));
                if filter.in_stock_only {
                    prop_assert!(product.stocked);
                }
            }
        }

        #[test]
        fn prop_headings_equal_category_runs(
            products in prop::collection::vec(product_strategy(), 0..24),
            filter in filter_strategy(),
        ) {
            let rows = build_rows(&products, &filter);
            let survivors: Vec<Product> = products.iter().filter(|p| filter.matches(p)).cloned().collect();
            let headings = rows.iter().filter(|r| matches!(r, ListingRow::Category(_))).count();

            prop_assert_eq!(ListingRow::products(&rows), survivors.clone());
            prop_assert_eq!(headings, category_runs(&survivors));
        }

        #[test]
        fn prop_empty_filter_keeps_everything(
            products in prop::collection::vec(product_strategy(), 0..24),
        ) {
            let rows = build_rows(&products, &ListingFilter::default());

            prop_assert_eq!(ListingRow::products(&rows), products.clone());
            prop_assert_eq!(rows.len(), products.len() + category_runs(&products));
        }

        #[test]
        fn prop_unmatched_search_is_empty(
            products in prop::collection::vec(product_strategy(), 0..24),
            stock in any::<bool>(),
        ) {
            // longer than any generated name
            let filter = ListingFilter::new("abcdefg", stock);
            prop_assert!(build_rows(&products, &filter).is_empty());
        }

        #[test]
        fn prop_idempotent(
            products in prop::collection::vec(product_strategy(), 0..24),
            filter in filter_strategy(),
        ) {
            let once = build_rows(&products, &filter);
            let twice = build_rows(&ListingRow::products(&once), &filter);
            prop_assert_eq!(once, twice);
        }
    }
}
