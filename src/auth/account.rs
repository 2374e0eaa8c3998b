//! Password, email verification and token introspection.

use std::fmt;

use serde::Serialize;

use crate::Client;
use crate::error::Result;
use crate::types::TokenIntrospection;

/// Client for account flows that do not change the session token.
///
/// Access via [`Client::account`].
///
/// ## Example
///
/// ```rust,no_run
/// # async fn run(client: aras_auth::Client) -> aras_auth::Result<()> {
/// let account = client.account();
/// account.change_password("old secret", "new secret").await?;
///
/// let info = account.introspect_token("eyJhbGciOi...").await?;
/// if !info.active {
///     println!("token expired or revoked");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AccountClient {
    client: Client,
}

#[derive(Serialize)]
struct ChangePasswordBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetPasswordBody<'a> {
    token: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct VerifyEmailBody<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
struct IntrospectBody<'a> {
    token: &'a str,
}

impl AccountClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Changes the signed-in user's password.
    ///
    /// Requires a session token.
    pub async fn change_password(
        &self,
        current_password: impl AsRef<str>,
        new_password: impl AsRef<str>,
    ) -> Result<()> {
        let body = ChangePasswordBody {
            current_password: current_password.as_ref(),
            new_password: new_password.as_ref(),
        };
        self.client
            .inner()
            .post("/auth/change-password", &body)
            .await?
            .into_unit()
    }

    /// Asks the service to email a password reset token to `email`.
    pub async fn forgot_password(&self, email: impl AsRef<str>) -> Result<()> {
        let body = ForgotPasswordBody {
            email: email.as_ref(),
        };
        self.client
            .inner()
            .post("/auth/forgot-password", &body)
            .await?
            .into_unit()
    }

    /// Sets a new password using a reset token from
    /// [`forgot_password`](Self::forgot_password).
    pub async fn reset_password(
        &self,
        reset_token: impl AsRef<str>,
        new_password: impl AsRef<str>,
    ) -> Result<()> {
        let body = ResetPasswordBody {
            token: reset_token.as_ref(),
            new_password: new_password.as_ref(),
        };
        self.client
            .inner()
            .post("/auth/reset-password", &body)
            .await?
            .into_unit()
    }

    /// Marks a user's email address as verified.
    pub async fn verify_email(&self, user_id: impl AsRef<str>) -> Result<()> {
        let body = VerifyEmailBody {
            user_id: user_id.as_ref(),
        };
        self.client
            .inner()
            .post("/auth/verify-email", &body)
            .await?
            .into_unit()
    }

    /// Reports whether `token` is active and whom it belongs to.
    pub async fn introspect_token(&self, token: impl AsRef<str>) -> Result<TokenIntrospection> {
        let body = IntrospectBody {
            token: token.as_ref(),
        };
        self.client
            .inner()
            .post("/auth/introspect", &body)
            .await?
            .into_record()
    }
}

impl fmt::Debug for AccountClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountClient").finish_non_exhaustive()
    }
}
