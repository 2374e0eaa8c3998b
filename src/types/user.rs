//! User records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// A user account.
///
/// Missing fields default to empty strings and `false`.
///
/// ```rust
/// use aras_auth::User;
///
/// let user: User = serde_json::from_str(r#"{"id": "u1", "email": "a@b.com"}"#).unwrap();
/// assert_eq!(user.email, "a@b.com");
/// assert!(!user.email_verified);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Unique user ID.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Account status as sent by the server. See [`User::parsed_status`].
    pub status: String,
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// Whether the user has been soft-deleted.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl User {
    /// Returns the user's full name, skipping empty parts.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Parses the status string into a known [`UserStatus`].
    pub fn parsed_status(&self) -> Option<UserStatus> {
        self.status.parse().ok()
    }

    /// Parses `created_at` as an RFC 3339 timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Parses `updated_at` as an RFC 3339 timestamp.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Known user account states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account is active.
    Active,
    /// Account has been deactivated.
    Inactive,
    /// Account is awaiting activation.
    Pending,
    /// Account has been suspended.
    Suspended,
}

impl UserStatus {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "pending" => Ok(UserStatus::Pending),
            "suspended" => Ok(UserStatus::Suspended),
            other => Err(format!("unknown user status: {}", other)),
        }
    }
}
