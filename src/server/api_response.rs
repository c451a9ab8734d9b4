use serde::Serialize;

use crate::item::Item;

pub const MSG_ITEM_ADDED: &str = "Item added";
pub const MSG_ITEM_DELETED: &str = "Item deleted";
pub const MSG_ITEM_NOT_FOUND: &str = "Item not found";

/// Reply for the create route.
#[derive(Debug, Serialize)]
pub struct CreateReply {
    pub message: String,
    pub item: Item,
}

impl CreateReply {
    #[must_use]
    pub fn added(item: Item) -> Self {
        Self {
            message: MSG_ITEM_ADDED.to_string(),
            item,
        }
    }
}

/// Reply for the delete route.
///
/// One endpoint, two wire shapes: success carries the removed item, a miss
/// carries only an `error` field (and still ships with a 200 status, which
/// the browser client relies on). The enum keeps the outcome tagged in Rust
/// while `untagged` preserves the JSON union on the wire.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DeleteReply {
    Deleted { message: String, item: Item },
    NotFound { error: String },
}

impl DeleteReply {
    #[must_use]
    pub fn deleted(item: Item) -> Self {
        Self::Deleted {
            message: MSG_ITEM_DELETED.to_string(),
            item,
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound {
            error: MSG_ITEM_NOT_FOUND.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "api_response_tests.rs"]
mod api_response_tests;
