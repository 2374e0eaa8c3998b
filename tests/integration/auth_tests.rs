//! Session lifecycle integration tests.
//!
//! Verify that the session token set by login and refresh is carried on
//! every request and that logout stops it being sent.

use aras_auth::{ErrorKind, RegisterRequest};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestServer, authorization, endpoint, failure, json_body, success};

#[tokio::test]
async fn test_session_lifecycle() {
    let ts = TestServer::start().await;
    ts.mount_login("alice@example.com", "pw", "T1").await;

    Mock::given(method("GET"))
        .and(path(endpoint("/users/me")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "id": "usr_1",
            "email": "alice@example.com"
        }))))
        .mount(&ts.server)
        .await;

    Mock::given(method("POST"))
        .and(path(endpoint("/auth/logout")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "logged out"
        })))
        .mount(&ts.server)
        .await;

    let client = ts.client();
    assert!(!client.is_authenticated());

    let auth = client.login("alice@example.com", "pw").await.unwrap();
    assert_eq!(auth.refresh_token, "refresh-T1");
    assert!(client.is_authenticated());

    client.current_user().await.unwrap();
    client.logout(&auth.refresh_token).await.unwrap();
    assert!(!client.is_authenticated());

    // Unauthenticated after logout: the header must be gone entirely.
    client.current_user().await.unwrap();

    let me = ts.requests_to("/users/me").await;
    assert_eq!(me.len(), 2);
    assert_eq!(authorization(&me[0]).as_deref(), Some("Bearer T1"));
    assert_eq!(authorization(&me[1]), None);

    let logout = ts.requests_to("/auth/logout").await;
    assert_eq!(authorization(&logout[0]).as_deref(), Some("Bearer T1"));
    assert_eq!(json_body(&logout[0]), json!({"refresh_token": "refresh-T1"}));

    // Login itself goes out without a token.
    let login = ts.requests_to("/auth/login").await;
    assert_eq!(authorization(&login[0]), None);
}

#[tokio::test]
async fn test_refresh_replaces_token_on_all_clones() {
    let ts = TestServer::start().await;
    ts.mount_login("alice@example.com", "pw", "T1").await;

    Mock::given(method("POST"))
        .and(path(endpoint("/auth/refresh")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "access_token": "T2",
            "refresh_token": "refresh-T2",
            "expires_in": 900,
            "token_type": "Bearer",
            "user": {}
        }))))
        .mount(&ts.server)
        .await;

    Mock::given(method("GET"))
        .and(path(endpoint("/roles/r1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
            "id": "r1",
            "name": "admin",
            "is_system": true
        }))))
        .mount(&ts.server)
        .await;

    let client = ts.client();
    let roles = client.roles();

    let auth = client.login("alice@example.com", "pw").await.unwrap();
    let refreshed = client.refresh_token(&auth.refresh_token).await.unwrap();
    assert!(refreshed.user.is_none());

    let role = roles.get("r1").await.unwrap();
    assert!(role.is_system);

    let requests = ts.requests_to("/roles/r1").await;
    assert_eq!(authorization(&requests[0]).as_deref(), Some("Bearer T2"));
}

#[tokio::test]
async fn test_rejected_login_leaves_client_unauthenticated() {
    let ts = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("/auth/login")))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(failure("invalid_credentials", "email or password is incorrect")),
        )
        .mount(&ts.server)
        .await;

    let client = ts.client();
    let err = client.login("alice@example.com", "nope").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.code(), Some("invalid_credentials"));
    assert_eq!(err.message(), "email or password is incorrect");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_register_then_verify() {
    let ts = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("/auth/register")))
        .respond_with(ResponseTemplate::new(201).set_body_json(success(json!({
            "id": "usr_9",
            "email": "bob@example.com",
            "first_name": "Bob",
            "status": "pending"
        }))))
        .mount(&ts.server)
        .await;

    Mock::given(method("POST"))
        .and(path(endpoint("/auth/verify-email")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&ts.server)
        .await;

    let client = ts.client();
    let user = client
        .register(RegisterRequest::new("bob@example.com", "pw").with_first_name("Bob"))
        .await
        .unwrap();
    assert_eq!(user.full_name(), "Bob");
    assert_eq!(user.parsed_status(), Some(aras_auth::UserStatus::Pending));

    client.account().verify_email(&user.id).await.unwrap();

    let register = ts.requests_to("/auth/register").await;
    assert_eq!(
        json_body(&register[0]),
        json!({
            "email": "bob@example.com",
            "password": "pw",
            "first_name": "Bob",
            "last_name": ""
        })
    );
    let verify = ts.requests_to("/auth/verify-email").await;
    assert_eq!(json_body(&verify[0]), json!({"user_id": "usr_9"}));
}

#[tokio::test]
async fn test_introspect_inactive_token() {
    let ts = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("/auth/introspect")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({"active": false}))))
        .mount(&ts.server)
        .await;

    let info = ts.client().account().introspect_token("stale").await.unwrap();
    assert!(!info.active);
    assert!(info.user_id.is_empty());
    assert!(info.expires_at_utc().is_none());
}
