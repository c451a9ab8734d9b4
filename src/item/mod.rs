//! The item data model.
mod error;
pub use error::StoreError;

use serde::{Deserialize, Serialize};

/// The record stored by the daemon: a name, a price, and an optional offer
/// flag.
///
/// An absent `is_offer` serializes as JSON `null` and is distinct from
/// `Some(false)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub is_offer: Option<bool>,
}
