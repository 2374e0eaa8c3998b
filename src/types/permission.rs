//! Permission records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_true, parse_timestamp};

/// A permission: the right to perform `action` on `resource`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    /// Unique permission ID.
    pub id: String,
    /// Resource name (e.g. `"groups"`).
    pub resource: String,
    /// Action name (e.g. `"read"`).
    pub action: String,
    /// Free-form description.
    pub description: String,
    /// Whether the permission is active. Defaults to `true`.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the permission has been soft-deleted.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl Default for Permission {
    fn default() -> Self {
        Self {
            id: String::new(),
            resource: String::new(),
            action: String::new(),
            description: String::new(),
            is_active: true,
            is_deleted: false,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl Permission {
    /// Returns the `resource:action` key identifying this permission.
    ///
    /// ```rust
    /// use aras_auth::Permission;
    ///
    /// let perm = Permission {
    ///     resource: "groups".into(),
    ///     action: "read".into(),
    ///     ..Permission::default()
    /// };
    /// assert_eq!(perm.key(), "groups:read");
    /// ```
    pub fn key(&self) -> String {
        format!("{}:{}", self.resource, self.action)
    }

    /// Returns `true` if this permission covers `action` on `resource`.
    pub fn allows(&self, resource: &str, action: &str) -> bool {
        self.is_active && !self.is_deleted && self.resource == resource && self.action == action
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
