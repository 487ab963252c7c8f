mod common;

use serde_json::json;

#[tokio::test]
async fn test_create_link_success() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    let response = server
        .post("/links")
        .json(&json!({ "originalUrl": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["originalUrl"], "https://example.com/some/long/path");
    assert_eq!(body["linkId"], 1);
    assert!(body["createdAt"].is_string());

    let code = body["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    assert_eq!(ctx.store.link_count(), 1);
}

#[tokio::test]
async fn test_create_link_populates_cache() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    server
        .post("/links")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    assert_eq!(ctx.cache.entry_count().await, 1);
}

#[tokio::test]
async fn test_create_link_rejects_unsupported_scheme() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    let response = server
        .post("/links")
        .json(&json!({ "originalUrl": "ftp://x.com" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(
        body["error"]["message"],
        "A valid originalUrl is required (must start with http/https)"
    );

    assert_eq!(ctx.store.link_count(), 0);
    assert_eq!(ctx.cache.entry_count().await, 0);
}

#[tokio::test]
async fn test_create_link_rejects_empty_and_missing_url() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    for body in [json!({ "originalUrl": "" }), json!({})] {
        let response = server.post("/links").json(&body).await;
        response.assert_status_bad_request();
    }

    assert_eq!(ctx.store.link_count(), 0);
}

#[tokio::test]
async fn test_create_link_rejects_malformed_json() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    let response = server
        .post("/links")
        .content_type("application/json")
        .text("{\"originalUrl\": ")
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_rejects_overlong_url() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    let url = format!("https://example.com/{}", "a".repeat(2048));

    let response = server
        .post("/links")
        .json(&json!({ "originalUrl": url }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(ctx.store.link_count(), 0);
}

#[tokio::test]
async fn test_create_link_collision_is_internal_error() {
    let ctx = common::create_test_context();
    ctx.store.reject_codes(true);
    let server = common::test_server(ctx.state.clone());

    let response = server
        .post("/links")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
    assert_eq!(ctx.store.link_count(), 0);
}

#[tokio::test]
async fn test_created_link_resolves() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    let created = server
        .post("/links")
        .json(&json!({ "originalUrl": "https://example.com/round-trip" }))
        .await
        .json::<serde_json::Value>();
    let code = created["shortCode"].as_str().unwrap();

    let response = server.get(&format!("/links/{}", code)).await;

    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/round-trip");
}

#[tokio::test]
async fn test_create_link_rejects_control_characters() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    for url in ["https://example.com/a\nb", "https://example.com/a\r\nX-Injected: 1"] {
        let response = server
            .post("/links")
            .json(&json!({ "originalUrl": url }))
            .await;

        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    assert_eq!(ctx.store.link_count(), 0);
    assert_eq!(ctx.cache.entry_count().await, 0);
}

#[tokio::test]
async fn test_create_link_accepts_url_at_length_limit() {
    let ctx = common::create_test_context();
    let server = common::test_server(ctx.state.clone());

    let prefix = "https://example.com/";
    let url = format!("{}{}", prefix, "a".repeat(2048 - prefix.len()));
    assert_eq!(url.len(), 2048);

    server
        .post("/links")
        .json(&json!({ "originalUrl": url }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    assert_eq!(ctx.store.link_count(), 1);
}
