mod common;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use shortly::infrastructure::policy::DenyListPolicy;

fn shorten_app(state: shortly::AppState) -> TestServer {
    let app = Router::new().nest("/api", shortly::api::routes::routes()).with_state(state);
    TestServer::new(app).unwrap()
}

fn future_expiry() -> String {
    (Utc::now() + Duration::days(7))
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::TEST_BASE_URL, code)
    );
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "promo",
            "expires_at": future_expiry(),
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"], "promo");
    assert_eq!(
        body["short_url"],
        format!("{}/promo", common::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn test_shorten_custom_code_taken() {
    let state = common::create_test_state();
    common::create_test_mapping(&state, "abc123", "https://x.com").await;
    let server = shorten_app(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://y.com",
            "custom_code": "abc123",
        }))
        .await;

    assert_eq!(response.status_code(), 409);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "code_taken");
}

#[tokio::test]
async fn test_shorten_conflict_keeps_existing_target() {
    let state = common::create_test_state();
    common::create_test_mapping(&state, "abc123", "https://x.com").await;
    let server = shorten_app(state.clone());

    server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://y.com",
            "custom_code": "abc123",
        }))
        .await;

    use shortly::domain::repositories::MappingRepository;
    let kept = state.store.get("abc123").await.unwrap().unwrap();
    assert_eq!(kept.long_url, "https://x.com");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_url");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_expiry_in_past() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://x.com",
            "custom_code": "promo",
            "expires_at": "2001-01-01T00:00",
        }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "expiry_in_past");
}

#[tokio::test]
async fn test_shorten_invalid_expiry_format() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://x.com",
            "expires_at": "31/12/2030 18:00",
        }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_expiry");
}

#[tokio::test]
async fn test_shorten_policy_rejects_url_and_code() {
    let policy = Arc::new(DenyListPolicy::new(["badword1"]));
    let server = shorten_app(common::create_test_state_with_policy(policy));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/badword1" }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "policy_rejected");

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "badword1x",
        }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "policy_rejected");
}

#[tokio::test]
async fn test_shorten_reserved_code_rejected() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "health",
        }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_code");
}

#[tokio::test]
async fn test_shorten_custom_code_bad_charset() {
    let server = shorten_app(common::create_test_state());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "no spaces allowed",
        }))
        .await;

    response.assert_status_bad_request();
}
