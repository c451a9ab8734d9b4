use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, info};

use crate::server::api_response::DeleteReply;
use crate::server::AppState;

/// Delete the item at the given position.
///
/// The index addresses the current order of the store; items after it shift
/// down by one on success. A non-integer path segment is rejected by the
/// `Path` extractor before this handler runs; an out-of-range index returns
/// the not-found payload with a success status, which the browser client
/// expects.
pub async fn delete_item(
    State(store): State<AppState>,
    Path(item_id): Path<usize>,
) -> Json<DeleteReply> {
    match store.remove_at(item_id) {
        Ok(item) => {
            info!(%item_id, item.name = %item.name, "item deleted");
            Json(DeleteReply::deleted(item))
        }
        Err(e) => {
            debug!(%item_id, "{e}");
            Json(DeleteReply::not_found())
        }
    }
}

#[cfg(test)]
#[path = "item_delete_tests.rs"]
mod item_delete_tests;
