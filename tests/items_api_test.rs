#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]

mod common;

use axum::extract::{Path, State};
use axum::Json;
use common::{create_test_state, item};
use itemd::server::api_response::DeleteReply;
use itemd::server::handlers::{create_item, delete_item, index_page, list_items, CreateItemRequest};
use serde_json::json;
use std::sync::Arc;

// Test the operations that the router wraps

#[tokio::test]
async fn test_create_then_list_preserves_insertion_order() {
    let state = create_test_state();

    for i in 0..5 {
        let req = CreateItemRequest {
            name: format!("item-{i}"),
            price: 1.0,
            is_offer: None,
        };
        create_item(State(Arc::clone(&state)), Json(req)).await;
    }

    let Json(items) = list_items(State(Arc::clone(&state))).await;
    assert_eq!(items.len(), 5);
    for (i, stored) in items.iter().enumerate() {
        assert_eq!(stored.name, format!("item-{i}"));
    }
}

#[tokio::test]
async fn test_create_reply_wire_format() {
    let state = create_test_state();
    let req = CreateItemRequest {
        name: "Book".to_string(),
        price: 9.99,
        is_offer: Some(true),
    };

    let Json(reply) = create_item(State(Arc::clone(&state)), Json(req)).await;
    let wire = serde_json::to_value(&reply).expect("Should serialize");

    assert_eq!(
        wire,
        json!({
            "message": "Item added",
            "item": {"name": "Book", "price": 9.99, "is_offer": true}
        })
    );
}

#[tokio::test]
async fn test_book_roundtrip_deep_equals() {
    let state = create_test_state();
    let req = CreateItemRequest {
        name: "Book".to_string(),
        price: 9.99,
        is_offer: Some(true),
    };
    create_item(State(Arc::clone(&state)), Json(req)).await;

    let Json(items) = list_items(State(Arc::clone(&state))).await;
    let wire = serde_json::to_value(&items).expect("Should serialize");

    assert_eq!(
        wire,
        json!([{"name": "Book", "price": 9.99, "is_offer": true}])
    );
}

#[tokio::test]
async fn test_create_without_offer_flag_is_null_not_false() {
    let state = create_test_state();
    let req = CreateItemRequest {
        name: "Pen".to_string(),
        price: 1.5,
        is_offer: None,
    };
    create_item(State(Arc::clone(&state)), Json(req)).await;

    let Json(items) = list_items(State(Arc::clone(&state))).await;
    let wire = serde_json::to_value(&items).expect("Should serialize");

    assert!(wire[0]["is_offer"].is_null());
    assert_ne!(wire[0]["is_offer"], json!(false));
}

#[tokio::test]
async fn test_delete_middle_item_shifts_positions() {
    let state = create_test_state();
    state.append(item("A", 1.0, None));
    state.append(item("B", 2.0, None));
    state.append(item("C", 3.0, None));

    let Json(reply) = delete_item(State(Arc::clone(&state)), Path(1)).await;

    match reply {
        DeleteReply::Deleted { message, item } => {
            assert_eq!(message, "Item deleted");
            assert_eq!(item.name, "B");
            assert_eq!(item.price, 2.0);
        }
        DeleteReply::NotFound { .. } => panic!("expected deleted reply"),
    }

    let Json(items) = list_items(State(Arc::clone(&state))).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "A");
    assert_eq!(items[1].name, "C");
}

#[tokio::test]
async fn test_delete_on_empty_store_returns_not_found_payload() {
    let state = create_test_state();

    let Json(reply) = delete_item(State(Arc::clone(&state)), Path(0)).await;
    let wire = serde_json::to_value(&reply).expect("Should serialize");

    assert_eq!(wire, json!({"error": "Item not found"}));
    assert!(state.is_empty());
}

#[tokio::test]
async fn test_delete_out_of_range_leaves_store_unchanged() {
    let state = create_test_state();
    state.append(item("only", 1.0, Some(false)));

    let Json(reply) = delete_item(State(Arc::clone(&state)), Path(5)).await;

    assert!(matches!(reply, DeleteReply::NotFound { .. }));
    let Json(items) = list_items(State(Arc::clone(&state))).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "only");
    assert_eq!(items[0].is_offer, Some(false));
}

#[tokio::test]
async fn test_repeated_deletes_drain_the_store() {
    let state = create_test_state();
    for name in ["a", "b", "c"] {
        state.append(item(name, 1.0, None));
    }

    // Deleting position 0 three times removes everything, front to back
    for expected in ["a", "b", "c"] {
        let Json(reply) = delete_item(State(Arc::clone(&state)), Path(0)).await;
        match reply {
            DeleteReply::Deleted { item, .. } => assert_eq!(item.name, expected),
            DeleteReply::NotFound { .. } => panic!("expected deleted reply"),
        }
    }

    let Json(reply) = delete_item(State(Arc::clone(&state)), Path(0)).await;
    assert!(matches!(reply, DeleteReply::NotFound { .. }));
}

#[tokio::test]
async fn test_index_page_contains_ui_hooks() {
    let page = index_page().await.0;
    assert!(page.contains("itemList"));
    assert!(page.contains("addItem"));
}
