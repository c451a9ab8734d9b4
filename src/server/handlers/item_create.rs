use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::item::Item;
use crate::server::api_response::CreateReply;
use crate::server::AppState;

/// JSON payload for the create route.
///
/// Shape and type checks happen during deserialization: a body missing
/// `name` or `price`, a non-numeric `price`, or a non-boolean `is_offer` is
/// rejected by the extractor before this handler runs. An omitted `is_offer`
/// stays unset rather than defaulting to `false`.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    pub is_offer: Option<bool>,
}

pub async fn create_item(
    State(store): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Json<CreateReply> {
    let item = Item {
        name: req.name,
        price: req.price,
        is_offer: req.is_offer,
    };
    store.append(item.clone());
    info!(item.name = %item.name, "item added");
    Json(CreateReply::added(item))
}

#[cfg(test)]
#[path = "item_create_tests.rs"]
mod item_create_tests;
