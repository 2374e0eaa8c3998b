//! Session operations on [`Client`].

use serde::Serialize;

use super::{LoginRequest, RegisterRequest};
use crate::Client;
use crate::error::Result;
use crate::types::{AuthResponse, User};

#[derive(Serialize)]
struct RefreshTokenBody<'a> {
    refresh_token: &'a str,
}

impl Client {
    /// Signs in and stores the returned access token as the session token.
    ///
    /// # Errors
    ///
    /// Returns an [`Api`](crate::ErrorKind::Api) error for rejected
    /// credentials and leaves the current token unchanged.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AuthResponse> {
        let request = LoginRequest::new(email, password);
        let auth: AuthResponse = self
            .inner()
            .post("/auth/login", &request)
            .await?
            .into_record()?;
        self.inner().set_token(auth.access_token.as_str());
        tracing::debug!(expires_in = auth.expires_in, "logged in");
        Ok(auth)
    }

    /// Creates an account. The session token is not changed.
    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        self.inner()
            .post("/auth/register", &request)
            .await?
            .into_record()
    }

    /// Exchanges a refresh token for new tokens and stores the new access
    /// token as the session token.
    pub async fn refresh_token(&self, refresh_token: impl AsRef<str>) -> Result<AuthResponse> {
        let body = RefreshTokenBody {
            refresh_token: refresh_token.as_ref(),
        };
        let auth: AuthResponse = self
            .inner()
            .post("/auth/refresh", &body)
            .await?
            .into_record()?;
        self.inner().set_token(auth.access_token.as_str());
        Ok(auth)
    }

    /// Revokes `refresh_token` and clears the session token.
    ///
    /// If the service call fails the session token is kept, so the caller
    /// can retry.
    pub async fn logout(&self, refresh_token: impl AsRef<str>) -> Result<()> {
        let body = RefreshTokenBody {
            refresh_token: refresh_token.as_ref(),
        };
        self.inner()
            .post("/auth/logout", &body)
            .await?
            .into_unit()?;
        self.inner().clear_token();
        Ok(())
    }

    /// Returns the user the session token belongs to.
    pub async fn current_user(&self) -> Result<User> {
        self.inner().get("/users/me").await?.into_record()
    }
}
