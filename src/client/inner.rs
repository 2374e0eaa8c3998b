//! Internal client implementation.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::Envelope;

/// Path prefix shared by every service endpoint.
pub(crate) const API_PREFIX: &str = "/api/v1";

/// Longest slice of a non-envelope error body kept in the error message.
const MAX_ERROR_BODY: usize = 256;

pub(crate) struct ClientInner {
    /// The configured service URL, without a trailing slash.
    pub base_url: String,

    /// `base_url` joined with [`API_PREFIX`].
    api_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// HTTP client shared by all requests.
    http_client: reqwest::Client,

    /// Current bearer token.
    token: RwLock<Option<String>>,
}

impl ClientInner {
    pub(crate) fn new(
        base_url: String,
        timeout: Duration,
        http_client: reqwest::Client,
        token: Option<String>,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let api_url = format!("{}{}", base_url, API_PREFIX);
        Self {
            base_url,
            api_url,
            timeout,
            http_client,
            token: RwLock::new(token),
        }
    }

    /// Replaces the bearer token sent with subsequent requests.
    pub(crate) fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
        tracing::debug!("session token set");
    }

    /// Removes the bearer token.
    pub(crate) fn clear_token(&self) {
        if self.token.write().take().is_some() {
            tracing::debug!("session token cleared");
        }
    }

    /// Returns a copy of the current bearer token.
    pub(crate) fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Returns `true` if a bearer token is set.
    pub(crate) fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    /// Builds the URL for an endpoint path such as `/users/abc`.
    fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<url::Url> {
        let mut url = url::Url::parse(&format!("{}{}", self.api_url, path)).map_err(|e| {
            Error::transport(format!("invalid request URL for {}: {}", path, e)).with_source(e)
        })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Builds the headers sent with every request.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref token) = *self.token.read() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                Error::transport("session token contains characters not allowed in a header")
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Sends one request and unwraps the transport layer of the reply.
    ///
    /// The returned envelope has not been checked for `success`; callers
    /// pick the extraction they need from [`Envelope`].
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path, query)?;
        let headers = self.build_headers()?;

        tracing::debug!(method = %method, path, "sending request");

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .headers(headers)
            .timeout(self.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %method, path, error = %e, "request failed");
            Error::from(e)
        })?;

        self.handle_response(&method, path, response).await
    }

    /// Reads the full body and maps the status.
    async fn handle_response(
        &self,
        method: &Method,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Envelope> {
        let status = response.status();
        let body = response.bytes().await.map_err(Error::from)?;

        if !status.is_success() {
            tracing::warn!(method = %method, path, status = status.as_u16(), "request rejected");
            return Err(map_status_error(status, &body));
        }

        tracing::debug!(method = %method, path, status = status.as_u16(), "request completed");

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Envelope::success(None));
        }
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Makes a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Envelope> {
        self.send::<()>(Method::GET, path, &[], None).await
    }

    /// Makes a GET request with query parameters.
    pub(crate) async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope> {
        self.send::<()>(Method::GET, path, query, None).await
    }

    /// Makes a POST request with a JSON body.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    /// Makes a PUT request with a JSON body.
    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    /// Makes a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Envelope> {
        self.send::<()>(Method::DELETE, path, &[], None).await
    }
}

/// Maps a non-2xx reply to a transport error.
///
/// When the body is an envelope its `error` and `message` fields are kept.
fn map_status_error(status: StatusCode, body: &[u8]) -> Error {
    let envelope = serde_json::from_slice::<Envelope>(body)
        .ok()
        .filter(|env| env.error.is_some() || env.message.is_some());

    let error = match envelope {
        Some(Envelope { error: code, message, .. }) => {
            let message = message.unwrap_or_else(|| status_text(status));
            let error = Error::transport(message);
            match code {
                Some(code) => error.with_code(code),
                None => error,
            }
        },
        None => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            if text.is_empty() {
                Error::transport(status_text(status))
            } else {
                let snippet: String = text.chars().take(MAX_ERROR_BODY).collect();
                Error::transport(format!("{}: {}", status_text(status), snippet))
            }
        },
    };
    error.with_status(status.as_u16())
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("unexpected status {} {}", status.as_u16(), reason),
        None => format!("unexpected status {}", status.as_u16()),
    }
}

/// Percent-encodes a caller-supplied ID for use as one path segment.
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
