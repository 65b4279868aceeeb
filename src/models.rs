//! Frontend Models
//!
//! Data structures matching the catalog endpoint's JSON.

use serde::{Deserialize, Serialize};

/// Product data structure (matches endpoint JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub category: String,
    /// Pre-formatted for display, never parsed
    pub price: String,
    pub stocked: bool,
    pub name: String,
}

impl Product {
    pub fn new(category: &str, price: &str, stocked: bool, name: &str) -> Self {
        Self {
            category: category.to_string(),
            price: price.to_string(),
            stocked,
            name: name.to_string(),
        }
    }
}

/// Bundled listing, sorted by category
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Fruits", "$1", true, "Apple"),
        Product::new("Fruits", "$1", true, "Dragonfruit"),
        Product::new("Fruits", "$2", false, "Passionfruit"),
        Product::new("Vegetables", "$2", true, "Spinach"),
        Product::new("Vegetables", "$4", false, "Pumpkin"),
        Product::new("Vegetables", "$1", true, "Peas"),
    ]
}
