//! User management.

use serde::{Deserialize, Serialize};

use super::{ListRequest, record_path, relation_member_path, relation_path};
use crate::Client;
use crate::error::Result;
use crate::types::{Role, User, UserStatus};

const COLLECTION: &str = "users";

/// Client for the `/users` collection.
///
/// Users are created through [`Client::register`].
///
/// ## Example
///
/// ```rust,no_run
/// use aras_auth::{UpdateUserRequest, UserStatus};
///
/// # async fn run(client: aras_auth::Client) -> aras_auth::Result<()> {
/// let users = client.users();
/// let user = users
///     .update("usr_123", UpdateUserRequest::new().with_status(UserStatus::Suspended))
///     .await?;
/// assert_eq!(user.status, "suspended");
///
/// users.assign_role("usr_123", "role_auditor").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UsersClient {
    client: Client,
}

impl UsersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists users, one page at a time.
    pub fn list(&self) -> ListRequest<User> {
        ListRequest::new(self.client.clone(), COLLECTION)
    }

    /// Gets a user by ID.
    pub async fn get(&self, user_id: impl AsRef<str>) -> Result<User> {
        let path = record_path(COLLECTION, user_id.as_ref());
        self.client.inner().get(&path).await?.into_record()
    }

    /// Updates a user. Only the fields set on `request` are sent.
    pub async fn update(&self, user_id: impl AsRef<str>, request: UpdateUserRequest) -> Result<User> {
        let path = record_path(COLLECTION, user_id.as_ref());
        self.client.inner().put(&path, &request).await?.into_record()
    }

    /// Deletes a user.
    pub async fn delete(&self, user_id: impl AsRef<str>) -> Result<()> {
        let path = record_path(COLLECTION, user_id.as_ref());
        self.client.inner().delete(&path).await?.into_unit()
    }

    /// Assigns a role directly to a user.
    pub async fn assign_role(&self, user_id: impl AsRef<str>, role_id: impl Into<String>) -> Result<()> {
        #[derive(Serialize)]
        struct AssignRoleBody {
            role_id: String,
        }
        let path = relation_path(COLLECTION, user_id.as_ref(), "roles");
        let body = AssignRoleBody {
            role_id: role_id.into(),
        };
        self.client.inner().post(&path, &body).await?.into_unit()
    }

    /// Removes a directly assigned role from a user.
    pub async fn remove_role(&self, user_id: impl AsRef<str>, role_id: impl AsRef<str>) -> Result<()> {
        let path = relation_member_path(COLLECTION, user_id.as_ref(), "roles", role_id.as_ref());
        self.client.inner().delete(&path).await?.into_unit()
    }

    /// Lists the roles assigned directly to a user.
    pub async fn roles(&self, user_id: impl AsRef<str>) -> Result<Vec<Role>> {
        let path = relation_path(COLLECTION, user_id.as_ref(), "roles");
        self.client.inner().get(&path).await?.into_list()
    }
}

impl std::fmt::Debug for UsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersClient").finish_non_exhaustive()
    }
}

/// Partial update of a user. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New account status (e.g. `"active"`, `"suspended"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateUserRequest {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status.as_str().to_string());
        self
    }

    /// Sets the status to a value not covered by [`UserStatus`].
    #[must_use]
    pub fn with_raw_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.status.is_none()
    }
}
