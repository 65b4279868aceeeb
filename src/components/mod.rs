//! UI Components
//!
//! Leptos components for the product listing.

mod filterable_product_table;
mod search_bar;
mod product_table;
mod product_category_row;
mod product_row;
mod remote_product_table;

pub use filterable_product_table::FilterableProductTable;
pub use search_bar::SearchBar;
pub use product_table::ProductTable;
pub use product_category_row::ProductCategoryRow;
pub use product_row::ProductRow;
pub use remote_product_table::RemoteProductTable;
