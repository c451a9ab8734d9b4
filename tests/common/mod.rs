//! Common test utilities

use itemd::{AppState, Item, ItemStore};
use std::sync::Arc;

/// Create a fresh shared store for a test
pub fn create_test_state() -> AppState {
    Arc::new(ItemStore::new())
}

/// Build an item record
#[allow(dead_code)] // Test utility for integration tests
pub fn item(name: &str, price: f64, is_offer: Option<bool>) -> Item {
    Item {
        name: name.to_string(),
        price,
        is_offer,
    }
}
