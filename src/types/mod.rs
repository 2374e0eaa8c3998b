//! Data records returned by the ArasAuth service.
//!
//! - [`User`], [`Group`], [`Role`], [`Permission`]: the four managed resources
//! - [`AuthResponse`]: tokens issued by login and refresh
//! - [`TokenIntrospection`]: result of introspecting a token
//! - [`ListResponse`]: paginated list wrapper
//! - [`Envelope`]: the `{success, data, error, message}` wrapper around every response
//!
//! Every record deserializes from any JSON object, substituting a default
//! for each missing field. Timestamps and user status are kept as the
//! opaque strings the server sends; parsed views are available through
//! accessor methods.

mod auth;
mod envelope;
mod group;
mod list;
mod permission;
mod role;
mod user;

pub use auth::{AuthResponse, TokenIntrospection};
pub use envelope::Envelope;
pub(crate) use envelope::decode_record;
pub use group::Group;
pub use list::ListResponse;
pub use permission::Permission;
pub use role::Role;
pub use user::{User, UserStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses an RFC 3339 timestamp, returning `None` for empty or malformed input.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn default_true() -> bool {
    true
}
