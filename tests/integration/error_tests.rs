//! Error classification integration tests.

use std::time::Duration;

use aras_auth::{Client, ErrorKind};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestServer, endpoint, failure, success};

#[tokio::test]
async fn test_plain_text_error_body() {
    let ts = TestServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint("/groups/g1")))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream connect error"))
        .mount(&ts.server)
        .await;

    let err = ts.client().groups().get("g1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.code(), None);
    assert!(err.message().contains("502"));
    assert!(err.message().contains("upstream connect error"));
}

#[tokio::test]
async fn test_long_error_body_is_truncated() {
    let ts = TestServer::start().await;
    let body = "x".repeat(10_000);

    Mock::given(method("DELETE"))
        .and(path(endpoint("/roles/r1")))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&ts.server)
        .await;

    let err = ts.client().roles().delete("r1").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.message().len() < 1_000);
}

#[tokio::test]
async fn test_api_failure_on_success_status() {
    let ts = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path(endpoint("/groups")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(failure("group_exists", "name already taken")),
        )
        .mount(&ts.server)
        .await;

    let err = ts
        .client()
        .groups()
        .create(aras_auth::CreateGroupRequest::new("admins"))
        .await
        .unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.status(), None);
    assert_eq!(err.code(), Some("group_exists"));
    assert_eq!(err.message(), "name already taken");
}

#[tokio::test]
async fn test_undecodable_body_is_transport_error() {
    let ts = TestServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint("/permissions/p1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&ts.server)
        .await;

    let err = ts.client().permissions().get("p1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_wrong_record_shape_is_invalid_response() {
    let ts = TestServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint("/users/u1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(["not", "a", "user"]))))
        .mount(&ts.server)
        .await;

    let err = ts.client().users().get("u1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let ts = TestServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint("/users/me")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success(json!({"id": "u1"})))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&ts.server)
        .await;

    let client = Client::builder()
        .url(ts.server.uri())
        .insecure()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.current_user().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 1 is reserved and nothing listens on it in test environments.
    let client = Client::builder()
        .url("http://127.0.0.1:1")
        .insecure()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.check_permission("u1", "docs", "read").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
}

#[test]
fn test_configuration_errors_need_no_network() {
    let err = Client::builder().url("not a url").build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = Client::builder()
        .url("http://auth.example.com")
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = Client::builder()
        .url("https://auth.example.com")
        .timeout(Duration::ZERO)
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
