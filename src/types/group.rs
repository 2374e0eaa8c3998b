//! Group records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_true, parse_timestamp};

/// A named collection of users.
///
/// Roles assigned to a group apply to all of its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Unique group ID.
    pub id: String,
    /// Group name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Whether the group is active. Defaults to `true`.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the group has been soft-deleted.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            is_active: true,
            is_deleted: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl Group {
    /// Parses `created_at` as an RFC 3339 timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Parses `updated_at` as an RFC 3339 timestamp.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}
