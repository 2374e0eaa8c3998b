//! Synchronous facade over [`Client`](crate::Client).
//!
//! Each blocking client owns a current-thread Tokio runtime and drives the
//! async client on it. Do not call these methods from inside an async
//! runtime; use the async client there.
//!
//! ```rust,no_run
//! use aras_auth::blocking;
//!
//! # fn run() -> aras_auth::Result<()> {
//! let client = blocking::Client::from_builder(
//!     aras_auth::Client::builder().url("https://auth.example.com"),
//! )?;
//! client.login("alice@example.com", "hunter2")?;
//!
//! let users = client.run(|c| c.users().list().limit(100).execute())?;
//! println!("{} users", users.total);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::auth::RegisterRequest;
use crate::client::{ClientBuilder, HasUrl, NoUrl};
use crate::error::{Error, Result};
use crate::types::{AuthResponse, User};

/// Blocking ArasAuth client.
pub struct Client {
    client: crate::Client,
    runtime: Runtime,
}

impl Client {
    /// Wraps an async client.
    pub fn from_async(client: crate::Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                Error::configuration("failed to start blocking runtime").with_source(e)
            })?;
        Ok(Self { client, runtime })
    }

    /// Builds the async client and wraps it.
    pub fn from_builder(builder: ClientBuilder<HasUrl>) -> Result<Self> {
        Self::from_async(builder.build()?)
    }

    /// Builds a client from the `ARAS_AUTH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_builder(ClientBuilder::<NoUrl>::from_env()?)
    }

    /// Runs any async client operation to completion.
    ///
    /// Covers the resource sub-clients, which have no blocking
    /// counterparts of their own.
    pub fn run<'a, F, Fut, T>(&'a self, f: F) -> Result<T>
    where
        F: FnOnce(&'a crate::Client) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.runtime.block_on(f(&self.client))
    }

    /// See [`crate::Client::login`].
    pub fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AuthResponse> {
        self.runtime.block_on(self.client.login(email, password))
    }

    /// See [`crate::Client::register`].
    pub fn register(&self, request: RegisterRequest) -> Result<User> {
        self.runtime.block_on(self.client.register(request))
    }

    /// See [`crate::Client::refresh_token`].
    pub fn refresh_token(&self, refresh_token: impl AsRef<str>) -> Result<AuthResponse> {
        self.runtime
            .block_on(self.client.refresh_token(refresh_token))
    }

    /// See [`crate::Client::logout`].
    pub fn logout(&self, refresh_token: impl AsRef<str>) -> Result<()> {
        self.runtime.block_on(self.client.logout(refresh_token))
    }

    /// See [`crate::Client::current_user`].
    pub fn current_user(&self) -> Result<User> {
        self.runtime.block_on(self.client.current_user())
    }

    /// See [`crate::Client::check_permission`].
    pub fn check_permission(
        &self,
        user_id: impl AsRef<str>,
        resource: impl AsRef<str>,
        action: impl AsRef<str>,
    ) -> Result<bool> {
        self.runtime
            .block_on(self.client.check_permission(user_id, resource, action))
    }

    /// Replaces the session token.
    pub fn set_token(&self, token: impl Into<String>) {
        self.client.set_token(token);
    }

    /// Removes the session token.
    pub fn clear_token(&self) {
        self.client.clear_token();
    }

    /// Returns the current session token.
    pub fn token(&self) -> Option<String> {
        self.client.token()
    }

    /// Returns `true` if a session token is set.
    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    /// Borrows the async client.
    pub fn as_async(&self) -> &crate::Client {
        &self.client
    }

    /// Unwraps the async client, shutting down the runtime.
    pub fn into_async(self) -> crate::Client {
        self.client
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("blocking::Client")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
