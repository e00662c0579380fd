//! Shared helpers for the HTTP integration tests

use axum::body::Body;
use axum::http::{Request, StatusCode};
use beer_cart::catalog::load_from_path;
use beer_cart::router::create_app_router;
use beer_cart::state::AppState;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

/// Path of the fixture catalog shipped with the crate
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/beers.json")
}

/// Builds a router over a fresh state loaded from the fixture catalog
pub fn create_test_app() -> axum::Router {
    let catalog = load_from_path(fixture_path()).expect("fixture catalog loads");
    create_app_router(Arc::new(AppState::new(catalog)))
}

/// Sends a request with an optional JSON body and decodes the JSON response
pub async fn send_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Ids of the beers in a JSON array of beers
pub fn beer_ids(beers: &Value) -> Vec<u64> {
    beers
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect()
}
