//! Role records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_true, parse_timestamp};

/// A named bundle of permissions, assignable to users and groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Unique role ID.
    pub id: String,
    /// Role name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Whether the role is active. Defaults to `true`.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the role has been soft-deleted.
    pub is_deleted: bool,
    /// Whether the role is built into the service and cannot be removed.
    pub is_system: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl Default for Role {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            is_active: true,
            is_deleted: false,
            is_system: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl Role {
    /// Parses `created_at` as an RFC 3339 timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Parses `updated_at` as an RFC 3339 timestamp.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}
