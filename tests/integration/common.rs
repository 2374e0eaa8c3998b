//! Common test harness for ArasAuth Rust SDK integration tests.
//!
//! Provides an in-process fake service and helpers for building envelopes.

#![allow(dead_code)]

use aras_auth::Client;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// API prefix every endpoint lives under.
pub const API: &str = "/api/v1";

/// A running fake ArasAuth service.
pub struct TestServer {
    pub server: MockServer,
}

impl TestServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Returns a client pointed at this server with no session token.
    pub fn client(&self) -> Client {
        Client::builder()
            .url(self.server.uri())
            .insecure()
            .build()
            .expect("client should build against the mock server")
    }

    /// Mounts a login endpoint that accepts `email`/`password` and issues
    /// `access_token`.
    pub async fn mount_login(&self, email: &str, password: &str, access_token: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint("/auth/login")))
            .and(body_json(json!({"email": email, "password": password})))
            .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({
                "access_token": access_token,
                "refresh_token": format!("refresh-{access_token}"),
                "expires_in": 900,
                "token_type": "Bearer",
                "user": {"id": "usr_1", "email": email, "status": "active"}
            }))))
            .mount(&self.server)
            .await;
    }

    /// Returns every request the server has seen so far.
    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled by default")
    }

    /// Returns the requests made to `endpoint_path` (without the API
    /// prefix), in arrival order.
    pub async fn requests_to(&self, endpoint_path: &str) -> Vec<Request> {
        let full = endpoint(endpoint_path);
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.url.path() == full)
            .collect()
    }
}

/// Prefixes `path` with the API root.
pub fn endpoint(path: &str) -> String {
    format!("{API}{path}")
}

/// Builds a success envelope around `data`.
pub fn success(data: Value) -> Value {
    json!({"success": true, "data": data})
}

/// Builds a failure envelope.
pub fn failure(code: &str, message: &str) -> Value {
    json!({"success": false, "error": code, "message": message})
}

/// Returns the Authorization header of `request`, if any.
pub fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Parses the JSON body of `request`.
pub fn json_body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body should be JSON")
}
