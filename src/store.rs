//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FetchError;
use crate::models::Product;

/// Progress of the listing load
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed(FetchError),
}

/// Catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// The listing, set once and never edited
    pub products: Vec<Product>,
    pub load: LoadState,
}

impl CatalogState {
    /// Already-loaded state for the bundled variant
    pub fn ready(products: Vec<Product>) -> Self {
        Self {
            products,
            load: LoadState::Ready,
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a finished load
pub fn store_finish_load(store: &CatalogStore, result: Result<Vec<Product>, FetchError>) {
    match result {
        Ok(products) => {
            *store.products().write() = products;
            *store.load().write() = LoadState::Ready;
        }
        Err(err) => *store.load().write() = LoadState::Failed(err),
    }
}

/// Back to pending before a retry
pub fn store_begin_load(store: &CatalogStore) {
    *store.load().write() = LoadState::Pending;
}
