//! Search Bar Component
//!
//! Controlled search input and in-stock checkbox.

use leptos::prelude::*;

/// Values flow in as signals, edits flow out through the callbacks
#[component]
pub fn SearchBar(
    filter_text: ReadSignal<String>,
    in_stock_only: ReadSignal<bool>,
    #[prop(into)] on_filter_text: Callback<String>,
    #[prop(into)] on_in_stock_only: Callback<bool>,
) -> impl IntoView {
    view! {
        <form class="search-bar" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            <input
                type="text"
                placeholder="Search..."
                prop:value=move || filter_text.get()
                on:input=move |ev| on_filter_text.run(event_target_value(&ev))
            />
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || in_stock_only.get()
                    on:change=move |ev| on_in_stock_only.run(event_target_checked(&ev))
                />
                " Only show products in stock"
            </label>
        </form>
    }
}
