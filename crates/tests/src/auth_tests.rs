use client::api;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{LoginRequest, RegisterRequest};

use crate::common;

fn profile(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "hunter22".to_string(),
        employee_name: "Jane Doe".to_string(),
        phone_number: "555-0100".to_string(),
        date_of_birth: "1990-04-12".to_string(),
    }
}

#[tokio::test]
async fn test_login_success_returns_payload() {
    let server = common::test_server("Admin").await;

    let credentials = LoginRequest {
        username: common::USERNAME.to_string(),
        password: common::PASSWORD.to_string(),
    };
    let response = api::login(&server.client, &credentials).await.unwrap().unwrap();

    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("User logged in successfully."));
}

#[tokio::test]
async fn test_login_rejected_surfaces_backend_message() {
    let server = common::test_server("Admin").await;

    let credentials = LoginRequest {
        username: common::USERNAME.to_string(),
        password: "wrong".to_string(),
    };
    let err = api::login(&server.client, &credentials).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_register_posts_all_profile_fields() {
    let server = common::test_server("Employee").await;

    api::register(&server.client, &profile("newhire")).await.unwrap();

    let registered = server.backend.lock().unwrap().registered.clone();
    assert_eq!(
        registered,
        vec![json!({
            "username": "newhire",
            "email": "newhire@example.com",
            "password": "hunter22",
            "employee_name": "Jane Doe",
            "phone_number": "555-0100",
            "date_of_birth": "1990-04-12",
        })]
    );
}

#[tokio::test]
async fn test_register_conflict_surfaces_message() {
    let server = common::test_server("Employee").await;

    let err = api::register(&server.client, &profile(common::TAKEN_USERNAME))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Username already exists");
    assert!(server.backend.lock().unwrap().registered.is_empty());
}

#[tokio::test]
async fn test_session_cookie_is_sent_on_later_requests() {
    let server = common::test_server("Employer").await;
    common::login(&server).await;

    let role = api::get_user_role(&server.client).await.unwrap();
    assert_eq!(role.role, "Employer");

    // Clones share the cookie jar.
    let cloned = server.client.clone();
    assert!(api::get_employees(&cloned).await.is_ok());
}

#[tokio::test]
async fn test_separate_clients_do_not_share_sessions() {
    let server = common::test_server("Employer").await;
    common::login(&server).await;

    let err = api::get_user_role(&server.fresh_client()).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let server = common::test_server("Admin").await;
    common::login(&server).await;

    api::logout(&server.client).await.unwrap();

    let err = api::get_user_role(&server.client).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(server.hits("logout"), 1);
}
