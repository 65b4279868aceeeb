//! Remote Product Table Component
//!
//! Loads the listing from the catalog endpoint on mount, then shows the
//! filterable table. Failures are shown with a retry button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::FilterableProductTable;
use crate::logging;
use crate::store::{store_begin_load, store_finish_load, use_catalog_store, CatalogStateStoreFields, LoadState};

#[component]
pub fn RemoteProductTable(endpoint: String, timeout_ms: u32) -> impl IntoView {
    let store = use_catalog_store();
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load on mount and on every retry
    Effect::new(move |_| {
        let attempt = reload_trigger.get();
        let endpoint = endpoint.clone();
        logging::info("CATALOG", &format!("Fetching {} (attempt {})", endpoint, attempt + 1));
        spawn_local(async move {
            let result = api::fetch_products_with_timeout(&endpoint, timeout_ms).await;
            match &result {
                Ok(products) => logging::info("CATALOG", &format!("Loaded {} products", products.len())),
                Err(err) => logging::warn("CATALOG", &format!("Load failed: {}", err)),
            }
            store_finish_load(&store, result);
        });
    });

    let retry = move |_: web_sys::MouseEvent| {
        store_begin_load(&store);
        set_reload_trigger.update(|v| *v += 1);
    };

    let products = Signal::derive(move || store.products().get());

    move || match store.load().get() {
        LoadState::Pending => view! { <p class="loading">"Please wait..."</p> }.into_any(),
        LoadState::Ready => view! { <FilterableProductTable products=products /> }.into_any(),
        LoadState::Failed(err) => view! {
            <div class="load-error">
                <p>{format!("Could not load products: {}", err)}</p>
                <button type="button" on:click=retry>"Retry"</button>
            </div>
        }.into_any(),
    }
}
