//! Catalog Frontend App
//!
//! Root component: picks the bundled or remote listing and provides the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterableProductTable, RemoteProductTable};
use crate::config::{AppConfig, ListingSource};
use crate::logging;
use crate::models::sample_products;
use crate::store::{CatalogState, CatalogStateStoreFields, CatalogStore};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    logging::info("APP", &format!("Listing source: {:?}", config.source));

    match config.source {
        ListingSource::Bundled => {
            let store: CatalogStore = Store::new(CatalogState::ready(sample_products()));
            provide_context(store);
            let products = Signal::derive(move || store.products().get());
            view! { <FilterableProductTable products=products /> }.into_any()
        }
        ListingSource::Remote { endpoint } => {
            let store: CatalogStore = Store::new(CatalogState::default());
            provide_context(store);
            view! {
                <RemoteProductTable endpoint=endpoint timeout_ms=config.fetch_timeout_ms />
            }.into_any()
        }
    }
}
