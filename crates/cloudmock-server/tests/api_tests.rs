//! Integration tests for the mock API router.
//!
//! These drive the assembled router in-process, verifying status codes and
//! response bodies for every endpoint, including the error envelopes for
//! invalid input. No listener is bound — requests go straight through the
//! service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use cloudmock_server::routes;

/// Helper: send a request through a fresh router, return (status, JSON body).
async fn send(method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload)),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .unwrap();

    let response = routes::api_router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).expect("response body should be JSON");
    (status, value)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Method::GET, uri, None).await
}

async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
    send(Method::POST, uri, Some(body.to_string())).await
}

async fn post_raw(uri: &str, body: &str) -> (StatusCode, Value) {
    send(Method::POST, uri, Some(body.to_owned())).await
}

async fn delete(uri: &str) -> (StatusCode, Value) {
    send(Method::DELETE, uri, None).await
}

/// Helper: assert the fixed error envelope.
fn assert_api_error(body: &Value, message: &str) {
    assert_eq!(body["error"]["type"], "api_error");
    assert_eq!(body["error"]["message"], message);
}

// ── Account ──────────────────────────────────────────────────────────

#[tokio::test]
async fn account_returns_the_fixed_value() {
    let (status, body) = get("/api/v1/account").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "acc_3f8a1c6b",
            "trust": {
                "direct_trust": true,
                "external_trust": false,
                "trust_all": false
            }
        })
    );
}

#[tokio::test]
async fn account_reads_are_idempotent() {
    let (_, first) = get("/api/v1/account").await;
    let (_, second) = get("/api/v1/account").await;
    assert_eq!(first, second);
}

// ── Deployments list ─────────────────────────────────────────────────

#[tokio::test]
async fn deployments_list_is_the_fixed_pair() {
    let (status, body) = get("/api/v1/deployments").await;
    assert_eq!(status, StatusCode::OK);

    let deployments = body["deployments"].as_array().unwrap();
    assert_eq!(deployments.len(), 2);
    assert_eq!(deployments[0]["name"], "logging-cluster");
    assert_eq!(deployments[0]["status"], "running");
    assert_eq!(deployments[0]["resources"], json!([]));
    assert_eq!(deployments[1]["name"], "metrics-cluster");
    assert_eq!(deployments[1]["status"], "stopped");
}

// ── Deployment create ────────────────────────────────────────────────

#[tokio::test]
async fn deployment_create_derives_the_id_from_the_name() {
    let (status, body) = post_json("/api/v1/deployments", &json!({"name": "Prod-Cluster"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], true);
    assert_eq!(body["id"], "dep_prod-cluster_123");
    assert_eq!(body["name"], "Prod-Cluster");
    assert_eq!(body["alias"], Value::Null);

    let resources = body["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["kind"], "elasticsearch");
    assert_eq!(resources[0]["refId"], "main-elasticsearch");
}

#[tokio::test]
async fn deployment_create_echoes_a_string_alias() {
    let (status, body) = post_json(
        "/api/v1/deployments",
        &json!({"name": "prod", "alias": "short"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alias"], "short");
}

#[tokio::test]
async fn deployment_create_drops_a_non_string_alias() {
    let (status, body) =
        post_json("/api/v1/deployments", &json!({"name": "prod", "alias": 7})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alias"], Value::Null);
}

#[tokio::test]
async fn deployment_create_stringifies_a_non_string_name() {
    let (status, body) = post_json("/api/v1/deployments", &json!({"name": 42})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "42");
    assert_eq!(body["id"], "dep_42_123");
}

#[tokio::test]
async fn deployment_create_requires_a_name() {
    for payload in [json!({}), json!({"name": null}), json!({"name": ""})] {
        let (status, body) = post_json("/api/v1/deployments", &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_api_error(&body, "Deployment name is required");
    }
}

#[tokio::test]
async fn deployment_create_rejects_malformed_json() {
    let (status, body) = post_raw("/api/v1/deployments", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_api_error(&body, "Invalid JSON payload");
}

// ── Deployment search ────────────────────────────────────────────────

#[tokio::test]
async fn search_returns_the_fixed_result_for_any_query() {
    let (status, empty_query) = post_json("/api/v1/deployments/_search", &json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, match_all) = post_json(
        "/api/v1/deployments/_search",
        &json!({"query": {"match_all": {}}}),
    )
    .await;

    // The query is never evaluated, so the result is identical.
    assert_eq!(empty_query, match_all);

    assert_eq!(empty_query["returnCount"], 2);
    assert_eq!(empty_query["matchCount"], 2);

    let deployments = empty_query["deployments"].as_array().unwrap();
    assert_eq!(deployments.len(), 2);
    for deployment in deployments {
        assert_eq!(deployment["healthy"], false);
        assert_eq!(deployment["resources"]["elasticsearch"], json!([]));
        assert_eq!(deployment["resources"]["kibana"], json!([]));
        assert_eq!(deployment["resources"]["apm"], json!([]));
    }
}

#[tokio::test]
async fn search_rejects_malformed_json() {
    let (status, body) = post_raw("/api/v1/deployments/_search", "not json at all").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_api_error(&body, "Invalid JSON payload");
}

// ── Organizations ────────────────────────────────────────────────────

#[tokio::test]
async fn organizations_list_carries_the_null_page_sentinel() {
    let (status, body) = get("/api/v1/organizations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next_page"], Value::Null);

    let organizations = body["organizations"].as_array().unwrap();
    assert_eq!(organizations.len(), 2);
    assert_eq!(organizations[0]["type"], "standard");
    assert_eq!(organizations[1]["type"], "enterprise");
}

#[tokio::test]
async fn organization_reads_are_idempotent() {
    let (_, first) = get("/api/v1/organizations").await;
    let (_, second) = get("/api/v1/organizations").await;
    assert_eq!(first, second);
}

// ── API key read ─────────────────────────────────────────────────────

#[tokio::test]
async fn key_read_echoes_the_requested_id() {
    let (status, body) = get("/api/v1/users/auth/keys/key_abc123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "key_abc123");
    assert_eq!(body["user_id"], "user_1000");
    // The secret value only ever appears on creation.
    assert!(body.get("api_key").is_none());
}

#[tokio::test]
async fn key_read_succeeds_for_any_id() {
    let (status, body) = get("/api/v1/users/auth/keys/does-not-exist").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "does-not-exist");
}

// ── API key create ───────────────────────────────────────────────────

#[tokio::test]
async fn key_create_defaults_every_field() {
    let (status, body) = post_json("/api/v1/users/auth/keys", &json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Unnamed Key");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["expiration_date"], Value::Null);

    let id = body["id"].as_str().unwrap();
    assert!(id.starts_with("key_"));
    let secret = body["api_key"].as_str().unwrap();
    assert!(secret.starts_with("essu_"));
}

#[tokio::test]
async fn key_create_uses_supplied_strings() {
    let (status, body) = post_json(
        "/api/v1/users/auth/keys",
        &json!({
            "name": "ci-key",
            "description": "pipeline credentials",
            "expiration_date": "2030-01-01T00:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "ci-key");
    assert_eq!(body["description"], "pipeline credentials");
    assert_eq!(body["expiration_date"], "2030-01-01T00:00:00Z");
}

#[tokio::test]
async fn key_create_drops_wrong_typed_fields() {
    let (status, body) = post_json(
        "/api/v1/users/auth/keys",
        &json!({"name": 12, "description": ["x"], "expiration_date": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Unnamed Key");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["expiration_date"], Value::Null);
}

#[tokio::test]
async fn key_create_generates_fresh_identifiers() {
    let (_, first) = post_json("/api/v1/users/auth/keys", &json!({})).await;
    let (_, second) = post_json("/api/v1/users/auth/keys", &json!({})).await;
    assert_ne!(first["id"], second["id"]);
    assert_ne!(first["api_key"], second["api_key"]);
}

#[tokio::test]
async fn key_create_rejects_malformed_json() {
    let (status, body) = post_raw("/api/v1/users/auth/keys", "{\"name\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_api_error(&body, "Invalid JSON payload");
}

// ── API key delete ───────────────────────────────────────────────────

#[tokio::test]
async fn key_delete_always_reports_success() {
    let (status, body) = delete("/api/v1/users/auth/keys/key_whatever").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"found": true, "invalidated": true}));
}

// ── Error envelope ───────────────────────────────────────────────────

#[tokio::test]
async fn errors_are_served_as_json() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/deployments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{broken"))
        .unwrap();

    let response = routes::api_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/json"));
}
