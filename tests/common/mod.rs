// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use h2omiga_tracker::config::Config;
use h2omiga_tracker::db::{MemoryStore, Repository};
use h2omiga_tracker::routes::create_router;
use h2omiga_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app over an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_store(MemoryStore::new())
}

/// Create a test app whose store fails every operation.
#[allow(dead_code)]
pub fn create_offline_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with_store(MemoryStore::offline())
}

fn create_test_app_with_store(store: MemoryStore) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), Repository::new(store)));
    (create_router(state.clone()), state)
}

/// Send one request and return the status and the JSON body (`Null` if empty).
#[allow(dead_code)]
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("{} {} returned non-JSON body: {:?}", method, uri, String::from_utf8_lossy(&bytes))
        })
    };
    (status, json)
}

/// Send one request and return the status and raw body bytes.
#[allow(dead_code)]
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// Register a user through the API.
#[allow(dead_code)]
pub async fn register(app: &Router, username: &str, city: &str) {
    let (status, _) = send(
        app,
        "POST",
        "/api/users",
        Some(serde_json::json!({ "username": username, "city": city })),
    )
    .await;
    assert!(status.is_success(), "register failed: {}", status);
}
