//! Filterable Product Table Component
//!
//! Owns the filter criteria and wires the search bar to the table.

use leptos::prelude::*;

use crate::components::{ProductTable, SearchBar};
use crate::models::Product;

#[component]
pub fn FilterableProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
) -> impl IntoView {
    let (filter_text, set_filter_text) = signal(String::new());
    let (in_stock_only, set_in_stock_only) = signal(false);

    view! {
        <div class="filterable-product-table">
            "General Market Shop"
            <SearchBar
                filter_text=filter_text
                in_stock_only=in_stock_only
                on_filter_text=move |text: String| set_filter_text.set(text)
                on_in_stock_only=move |checked: bool| set_in_stock_only.set(checked)
            />
            <ProductTable
                products=products
                filter_text=filter_text
                in_stock_only=in_stock_only
            />
        </div>
    }
}
