//! # HTTP API Tests
//!
//! Exercise the full router (handlers, middleware, error mapping) against an
//! isolated in-memory store.
//!
//! These tests verify:
//! - Storing a secret returns its content-addressed id
//! - A stored secret can be read exactly once
//! - Invalid store requests are rejected with `400 {}`
//! - Unknown ids and `GET /` return `404 {"data": ""}`
//! - Unsupported methods, including HEAD, return `405` and leave the secret in place
//! - Health check and metrics routes

use std::sync::{Arc, Once};

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use secret_app::observability::metrics::register_metrics;
use secret_app::server::build_router;
use secret_app::service::derive_key;
use secret_app::{SecretService, SecretStore};
use serde_json::json;

const PLAINTEXT: &str = "My super secret123";
const PLAINTEXT_ID: &str = "c616584ac64a93aafe1c16b6620f5bcd";

fn test_server() -> (TestServer, Arc<SecretStore>) {
    let store = Arc::new(SecretStore::new());
    let router = build_router(SecretService::new(Arc::clone(&store)));
    let server = TestServer::new(router).expect("failed to start test server");
    (server, store)
}

#[tokio::test]
async fn test_store_secret_returns_id() {
    let (server, store) = test_server();

    let response = server
        .post("/")
        .json(&json!({ "plain_text": PLAINTEXT }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": PLAINTEXT_ID }));
    assert!(store.take_and_remove(PLAINTEXT_ID).is_some());
}

#[tokio::test]
async fn test_store_secret_without_json_content_type() {
    let (server, _) = test_server();

    let response = server
        .post("/")
        .bytes(Bytes::from_static(br#"{"plain_text":"My super secret123"}"#))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": PLAINTEXT_ID }));
}

#[tokio::test]
async fn test_secret_can_be_read_once() {
    let (server, store) = test_server();

    server
        .post("/")
        .json(&json!({ "plain_text": PLAINTEXT }))
        .await
        .assert_status_ok();

    let first = server.get(&format!("/{PLAINTEXT_ID}")).await;
    first.assert_status_ok();
    first.assert_json(&json!({ "data": PLAINTEXT }));
    assert!(store.take_and_remove(PLAINTEXT_ID).is_none());

    let second = server.get(&format!("/{PLAINTEXT_ID}")).await;
    second.assert_status(StatusCode::NOT_FOUND);
    second.assert_json(&json!({ "data": "" }));
}

#[tokio::test]
async fn test_secret_stored_directly_is_served() {
    let (server, store) = test_server();
    store.put(PLAINTEXT_ID, zeroize::Zeroizing::new(PLAINTEXT.to_string()));

    let response = server.get(&format!("/{PLAINTEXT_ID}")).await;
    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"data":"My super secret123"}"#);
}

#[tokio::test]
async fn test_identical_secrets_share_one_entry() {
    let (server, _) = test_server();

    for _ in 0..2 {
        server
            .post("/")
            .json(&json!({ "plain_text": "x" }))
            .await
            .assert_json(&json!({ "id": "9dd4e461268c8034f5c8564e155c67a6" }));
    }

    server
        .get("/9dd4e461268c8034f5c8564e155c67a6")
        .await
        .assert_json(&json!({ "data": "x" }));
    server
        .get("/9dd4e461268c8034f5c8564e155c67a6")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_rejects_empty_plaintext() {
    let (server, store) = test_server();

    let response = server.post("/").json(&json!({ "plain_text": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({}));
    assert!(store.take_and_remove(&derive_key("")).is_none());
}

#[tokio::test]
async fn test_store_rejects_missing_plaintext() {
    let (server, _) = test_server();

    let response = server.post("/").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({}));
}

#[tokio::test]
async fn test_store_rejects_missing_body() {
    let (server, _) = test_server();

    let response = server.post("/").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({}));
}

#[tokio::test]
async fn test_store_rejects_malformed_json() {
    let (server, store) = test_server();

    let response = server
        .post("/")
        .bytes(Bytes::from_static(b"{\"plain_text\": "))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.post("/").json(&json!({ "plain_text": 42 })).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    assert!(store.take_and_remove(&derive_key("42")).is_none());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (server, _) = test_server();

    let response = server.get(&format!("/{PLAINTEXT_ID}")).await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "data": "" }));
}

#[tokio::test]
async fn test_malformed_ids_are_not_found() {
    let (server, _) = test_server();

    for path in ["/not-a-hash", "/a/b/c", "/%3Cscript%3E"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "data": "" }));
    }
}

#[tokio::test]
async fn test_get_root_without_id_is_not_found() {
    let (server, _) = test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "data": "" }));
}

#[tokio::test]
async fn test_put_is_method_not_allowed() {
    let (server, _) = test_server();

    let response = server.put("/").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_text("Method Not Allowed.");
}

#[tokio::test]
async fn test_delete_on_id_is_method_not_allowed() {
    let (server, store) = test_server();
    store.put(PLAINTEXT_ID, zeroize::Zeroizing::new(PLAINTEXT.to_string()));

    let response = server.delete(&format!("/{PLAINTEXT_ID}")).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(store.take_and_remove(PLAINTEXT_ID).is_some());
}

#[tokio::test]
async fn test_head_does_not_consume_secret() {
    let (server, _) = test_server();

    server
        .post("/")
        .json(&json!({ "plain_text": PLAINTEXT }))
        .await
        .assert_status_ok();

    let head = server
        .method(Method::HEAD, &format!("/{PLAINTEXT_ID}"))
        .await;
    head.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let response = server.get(&format!("/{PLAINTEXT_ID}")).await;
    response.assert_status_ok();
    response.assert_json(&json!({ "data": PLAINTEXT }));
}

#[tokio::test]
async fn test_head_on_root_is_method_not_allowed() {
    let (server, _) = test_server();

    server
        .method(Method::HEAD, "/")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) = test_server();

    let response = server.get("/healthcheck").await;

    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    static REGISTER: Once = Once::new();
    REGISTER.call_once(|| register_metrics().expect("failed to register metrics"));

    let (server, _) = test_server();
    server
        .post("/")
        .json(&json!({ "plain_text": "metrics test secret" }))
        .await
        .assert_status_ok();
    server
        .get(&format!("/{}", derive_key("metrics test secret")))
        .await
        .assert_status_ok();

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    assert_eq!(
        response.header(CONTENT_TYPE),
        "text/plain; version=0.0.4"
    );
    let body = response.text();
    for series in [
        "secret_app_secrets_stored_total",
        "secret_app_secrets_retrieved_total",
        "secret_app_secrets_not_found_total",
        "secret_app_validation_failures_total",
        "secret_app_requests_total",
        "secret_app_request_duration_seconds",
    ] {
        assert!(body.contains(series), "missing {series} in:\n{body}");
    }
}
