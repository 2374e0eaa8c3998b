//! Request bodies carrying user credentials.

use std::fmt;

use serde::Serialize;

/// Credentials for [`Client::login`](crate::Client::login).
///
/// `Debug` output never includes the password.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// New account details for [`Client::register`](crate::Client::register).
///
/// ## Example
///
/// ```rust
/// use aras_auth::RegisterRequest;
///
/// let request = RegisterRequest::new("ada@example.com", "correct horse")
///     .with_name("Ada", "Lovelace");
/// assert_eq!(request.first_name, "Ada");
/// assert!(!format!("{:?}", request).contains("correct horse"));
/// ```
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// First name; may be empty.
    pub first_name: String,
    /// Last name; may be empty.
    pub last_name: String,
}

impl RegisterRequest {
    /// Creates a registration request with empty names.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    /// Sets the first and last name.
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
