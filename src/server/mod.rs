//! HTTP API + page server.
//!
//! All access to the item store goes through the handlers in this module;
//! the router wires them to the paths in [`routes`].

pub mod api_response;
pub mod handlers;
pub mod routes;

use crate::store::ItemStore;
use axum::routing::{delete, get};
use axum::Router;
use std::sync::Arc;

/// Shared handler state: the process-wide item store.
pub type AppState = Arc<ItemStore>;

/// Build the application router over the given store.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::INDEX, get(handlers::index_page))
        .route(
            routes::ITEMS,
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(routes::ITEM, delete(handlers::delete_item))
        .with_state(state)
}
