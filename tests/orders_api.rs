//! Orders API Tests
//!
//! - Valid orders are stored with a server-side `createdAt` and answered 201
//! - Missing, falsy or mistyped fields are rejected with 400 before storage

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use chrono::DateTime;
use serde_json::json;

use common::{app, app_with, send, FailingStore};
use docgate::http_server::HttpServerConfig;
use docgate::rest_api::{CREATED_AT_FIELD, ORDERS_COLLECTION};
use docgate::store::{DocumentId, DocumentStore};

#[tokio::test]
async fn test_create_order_then_list() {
    let (app, _) = app();
    let order = json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": [1, 2], "numSpaces": 2});

    let created = send(&app, Method::POST, "/orders", Some(order)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let body = created.json();
    assert_eq!(body["message"], "Order successfully created");
    let order_id = body["orderId"].as_str().expect("orderId is a string");
    assert!(order_id.parse::<DocumentId>().is_ok());

    let listed = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let orders = listed.json();
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let stored = &orders[0];
    assert_eq!(stored["_id"], json!(order_id));
    assert_eq!(stored["name"], "Alice");
    assert_eq!(stored["phoneNumber"], "123");
    assert_eq!(stored["lessonIDs"], json!([1, 2]));
    assert_eq!(stored["numSpaces"], 2);
    let created_at = stored[CREATED_AT_FIELD].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_numeric_phone_number_is_accepted() {
    let (app, _) = app();
    let order = json!({"name": "Alice", "phoneNumber": 5551234, "lessonIDs": [1], "numSpaces": 1});

    let created = send(&app, Method::POST, "/orders", Some(order)).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let listed = send(&app, Method::GET, "/orders", None).await.json();
    assert_eq!(listed[0]["phoneNumber"], 5551234);
}

#[tokio::test]
async fn test_orders_are_visible_through_generic_routes() {
    let (app, _) = app();
    let order = json!({"name": "Bob", "phoneNumber": "555", "lessonIDs": ["x"], "numSpaces": 1});
    send(&app, Method::POST, "/orders", Some(order)).await;

    let listed = send(&app, Method::GET, "/collections/orders", None).await.json();
    assert_eq!(listed[0]["name"], "Bob");
}

#[tokio::test]
async fn test_client_created_at_is_replaced() {
    let (app, _) = app();
    let order = json!({
        "name": "Alice",
        "phoneNumber": "123",
        "lessonIDs": [1],
        "numSpaces": 1,
        "createdAt": "1999-01-01T00:00:00.000Z"
    });
    send(&app, Method::POST, "/orders", Some(order)).await;

    let listed = send(&app, Method::GET, "/orders", None).await.json();
    assert_ne!(listed[0]["createdAt"], "1999-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn test_string_num_spaces_is_rejected() {
    let (app, store) = app();
    let order = json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": [1, 2], "numSpaces": "two"});

    let res = send(&app, Method::POST, "/orders", Some(order)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json(), json!({"message": "Invalid data types"}));
    assert!(store.find_all(ORDERS_COLLECTION).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_array_lesson_ids_is_rejected() {
    let (app, store) = app();
    let order = json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": "1,2", "numSpaces": 2});

    let res = send(&app, Method::POST, "/orders", Some(order)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(store.find_all(ORDERS_COLLECTION).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let (app, store) = app();
    let bodies = [
        json!({}),
        json!({"phoneNumber": "123", "lessonIDs": [1], "numSpaces": 1}),
        json!({"name": "Alice", "lessonIDs": [1], "numSpaces": 1}),
        json!({"name": "Alice", "phoneNumber": "123", "numSpaces": 1}),
        json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": [1]}),
        json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": [1], "numSpaces": 0}),
        json!({"name": "", "phoneNumber": "123", "lessonIDs": [1], "numSpaces": 1}),
    ];

    for body in bodies {
        let res = send(&app, Method::POST, "/orders", Some(body.clone())).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(res.json(), json!({"message": "Missing required fields"}));
    }
    assert!(store.find_all(ORDERS_COLLECTION).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_order_leaves_count_unchanged() {
    let (app, _) = app();
    let good = json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": [1], "numSpaces": 1});
    send(&app, Method::POST, "/orders", Some(good)).await;

    let bad = json!({"name": "Eve", "phoneNumber": "000", "lessonIDs": [1], "numSpaces": "two"});
    send(&app, Method::POST, "/orders", Some(bad)).await;

    let listed = send(&app, Method::GET, "/orders", None).await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_orders_list() {
    let (app, _) = app();
    let res = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!([]));
}

#[tokio::test]
async fn test_order_store_failures_are_500() {
    let app = app_with(Arc::new(FailingStore), HttpServerConfig::default());

    let order = json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": [1], "numSpaces": 1});
    let created = send(&app, Method::POST, "/orders", Some(order)).await;
    assert_eq!(created.status, StatusCode::INTERNAL_SERVER_ERROR);

    let listed = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(listed.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_invalid_order_never_reaches_failing_store() {
    let app = app_with(Arc::new(FailingStore), HttpServerConfig::default());
    let order = json!({"name": "Alice", "phoneNumber": "123", "lessonIDs": [1], "numSpaces": "two"});
    let res = send(&app, Method::POST, "/orders", Some(order)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}
