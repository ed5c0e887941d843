use client::RequestOptions;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ApiError, ClientConfig, RoleResponse, REQUEST_FAILED_FALLBACK};

use crate::common;

#[tokio::test]
async fn test_fetch_sends_json_body_with_content_type() {
    let server = common::test_server("Admin").await;

    let options = RequestOptions::post().json(&json!({ "name": "Ada" })).unwrap();
    let data = server.client.fetch("echo", options).await.unwrap().unwrap();

    assert_eq!(data["content_type"], "application/json");
    assert_eq!(data["body"], json!({ "name": "Ada" }));
}

#[tokio::test]
async fn test_fetch_without_trailing_slash_in_base_url() {
    let server = common::test_server("Admin").await;
    let base = server.base_url.trim_end_matches('/').to_string();
    let client = client::ApiClient::new(ClientConfig::new(base)).unwrap();

    let data = client
        .fetch("/echo", RequestOptions::post().json(&json!({})).unwrap())
        .await
        .unwrap();
    assert!(data.is_some());
}

#[tokio::test]
async fn test_non_success_uses_body_message() {
    let server = common::test_server("Admin").await;

    let err = server
        .client
        .fetch(
            "auth/login",
            RequestOptions::post()
                .json(&json!({ "username": "nobody", "password": "wrong" }))
                .unwrap(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_non_success_without_message_uses_fallback() {
    let server = common::test_server("Admin").await;

    let err = server
        .client
        .fetch("status/detail-error", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.message(), REQUEST_FAILED_FALLBACK);
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn test_non_json_error_body_uses_fallback() {
    let server = common::test_server("Admin").await;

    let err = server
        .client
        .fetch("status/html-error", RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(err.message(), REQUEST_FAILED_FALLBACK);
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_empty_success_body_is_absent() {
    let server = common::test_server("Admin").await;

    let data = server
        .client
        .fetch("status/no-content", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(data, None);
}

#[tokio::test]
async fn test_empty_body_where_data_is_required_is_an_error() {
    let server = common::test_server("Admin").await;

    let result: Result<RoleResponse, ApiError> = server
        .client
        .fetch_json("status/no-content", RequestOptions::get())
        .await;
    assert!(result.unwrap_err().message().starts_with("Malformed response"));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client::ApiClient::new(ClientConfig::new(format!("http://{addr}/"))).unwrap();
    let err = client
        .fetch("auth/get_user_role", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(err.message().starts_with("Network error"));
    assert_eq!(err.status(), None);
}
