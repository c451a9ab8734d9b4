use axum::extract::State;
use axum::Json;

use crate::item::Item;
use crate::server::AppState;

pub async fn list_items(State(store): State<AppState>) -> Json<Vec<Item>> {
    Json(store.get_all())
}
