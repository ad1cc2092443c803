//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use docgate::http_server::{HttpServer, HttpServerConfig};
use docgate::store::{
    Document, DocumentId, DocumentStore, MemoryStore, SharedStore, StoreError, StoreResult,
};

/// Router over a fresh in-memory store, plus the store for inspection
pub fn app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app_with(store.clone(), HttpServerConfig::default()), store)
}

pub fn app_with(store: SharedStore, config: HttpServerConfig) -> Router {
    HttpServer::new(config, store).router()
}

/// Response status, headers and raw body
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Send one request through the router
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Store whose every operation fails, for the 500 path
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Poisoned)
    }

    async fn find_all(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        Err(StoreError::Poisoned)
    }

    async fn insert_one(&self, _collection: &str, _document: Document) -> StoreResult<DocumentId> {
        Err(StoreError::Poisoned)
    }

    async fn delete_one(&self, _collection: &str, _id: DocumentId) -> StoreResult<u64> {
        Err(StoreError::Poisoned)
    }

    async fn update_one(
        &self,
        _collection: &str,
        _id: DocumentId,
        _changes: Document,
    ) -> StoreResult<u64> {
        Err(StoreError::Poisoned)
    }
}
