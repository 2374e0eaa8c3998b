//! Token records returned by the authentication endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use super::User;

/// Tokens issued by `login` and `refresh_token`.
///
/// `user` is `None` when the server omits it, sends `null`, or sends an
/// empty object.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token used to obtain a new access token.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Token scheme. Defaults to `"Bearer"`.
    pub token_type: String,
    /// The authenticated user.
    #[serde(
        deserialize_with = "empty_user_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<User>,
}

impl Default for AuthResponse {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            refresh_token: String::new(),
            expires_in: 0,
            token_type: "Bearer".to_string(),
            user: None,
        }
    }
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("user", &self.user)
            .finish()
    }
}

fn empty_user_as_none<'de, D>(deserializer: D) -> Result<Option<User>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value @ serde_json::Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
        Some(_) => Err(de::Error::custom("user must be a JSON object")),
    }
}

/// Result of introspecting a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenIntrospection {
    /// Whether the token is currently valid.
    pub active: bool,
    /// Subject of the token.
    pub user_id: String,
    /// Email of the subject.
    pub email: String,
    /// Expiry as a Unix timestamp in seconds; `0` when unknown.
    #[serde(rename = "exp")]
    pub expires_at: i64,
    /// Space-separated scopes granted to the token, if any.
    pub scope: String,
}

impl TokenIntrospection {
    /// Returns the expiry time, if the server reported one.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        if self.expires_at <= 0 {
            return None;
        }
        DateTime::from_timestamp(self.expires_at, 0)
    }
}
