//! Product Table Component
//!
//! Filters and groups the listing, then renders one row per entry.

use leptos::prelude::*;

use crate::components::{ProductCategoryRow, ProductRow};
use crate::listing::{build_rows, ListingFilter, ListingRow};
use crate::models::Product;

#[component]
pub fn ProductTable(
    products: Signal<Vec<Product>>,
    filter_text: ReadSignal<String>,
    in_stock_only: ReadSignal<bool>,
) -> impl IntoView {
    let rows = Memo::new(move |_| {
        let filter = ListingFilter::new(filter_text.get(), in_stock_only.get());
        products.with(|products| build_rows(products, &filter))
    });

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Price"</th>
                </tr>
            </thead>
            // Headings can repeat for unsorted input, so rows are not keyed
            <tbody>
                {move || rows.get().into_iter().map(|row| match row {
                    ListingRow::Category(category) => view! {
                        <ProductCategoryRow category=category />
                    }.into_any(),
                    ListingRow::Product(product) => view! {
                        <ProductRow product=product />
                    }.into_any(),
                }).collect_view()}
            </tbody>
        </table>
    }
}
