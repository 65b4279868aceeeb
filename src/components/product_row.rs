//! Product Row Component

use leptos::prelude::*;

use crate::models::Product;

/// Name and price cells; unstocked names are shown in red
#[component]
pub fn ProductRow(product: Product) -> impl IntoView {
    let Product { name, price, stocked, .. } = product;
    let name = if stocked {
        name.into_any()
    } else {
        view! { <span class="out-of-stock" style="color: red">{name}</span> }.into_any()
    };

    view! {
        <tr class="product-row">
            <td>{name}</td>
            <td>{price}</td>
        </tr>
    }
}
