//! Category heading row spanning both columns.

use leptos::prelude::*;

#[component]
pub fn ProductCategoryRow(category: String) -> impl IntoView {
    view! {
        <tr class="product-category-row">
            <th colspan="2">{category}</th>
        </tr>
    }
}
