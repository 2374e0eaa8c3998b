//! The ArasAuth client.
//!
//! [`Client`] owns the connection settings and the session token. Resource
//! operations hang off sub-clients borrowed from it:
//! - [`UsersClient`](crate::resources::UsersClient) via [`Client::users`]
//! - [`GroupsClient`](crate::resources::GroupsClient) via [`Client::groups`]
//! - [`RolesClient`](crate::resources::RolesClient) via [`Client::roles`]
//! - [`PermissionsClient`](crate::resources::PermissionsClient) via
//!   [`Client::permissions`]
//! - [`AccountClient`](crate::auth::AccountClient) via [`Client::account`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aras_auth::Client;
//!
//! # async fn run() -> aras_auth::Result<()> {
//! let client = Client::builder().url("https://auth.example.com").build()?;
//! client.login("alice@example.com", "hunter2").await?;
//!
//! let page = client.users().list().page(1).limit(50).await?;
//! for user in &page {
//!     println!("{} <{}>", user.full_name(), user.email);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
pub(crate) mod inner;

pub use builder::{ClientBuilder, DEFAULT_TIMEOUT, HasUrl, NoUrl};

use std::sync::Arc;
use std::time::Duration;

use crate::auth::AccountClient;
use crate::resources::{GroupsClient, PermissionsClient, RolesClient, UsersClient};

/// The ArasAuth SDK client.
///
/// ## Thread Safety
///
/// `Client` is `Clone + Send + Sync`. Clones share one HTTP connection
/// pool and one session token: a login through any clone authenticates
/// them all.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aras_auth::Client;
    ///
    /// let client = Client::builder()
    ///     .url("http://localhost:8080")
    ///     .insecure()
    ///     .build()?;
    /// # Ok::<(), aras_auth::Error>(())
    /// ```
    pub fn builder() -> ClientBuilder<NoUrl> {
        ClientBuilder::new()
    }

    /// Returns the users sub-client.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.clone())
    }

    /// Returns the groups sub-client.
    pub fn groups(&self) -> GroupsClient {
        GroupsClient::new(self.clone())
    }

    /// Returns the roles sub-client.
    pub fn roles(&self) -> RolesClient {
        RolesClient::new(self.clone())
    }

    /// Returns the permissions sub-client.
    pub fn permissions(&self) -> PermissionsClient {
        PermissionsClient::new(self.clone())
    }

    /// Returns the account sub-client (password, email and token flows).
    pub fn account(&self) -> AccountClient {
        AccountClient::new(self.clone())
    }

    /// Sets the bearer token sent with subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.set_token(token);
    }

    /// Removes the bearer token.
    pub fn clear_token(&self) {
        self.inner.clear_token();
    }

    /// Returns the current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.token()
    }

    /// Returns `true` if a bearer token is set.
    pub fn is_authenticated(&self) -> bool {
        self.inner.has_token()
    }

    /// Returns the base URL of the client.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .field("authenticated", &self.inner.has_token())
            .finish_non_exhaustive()
    }
}
