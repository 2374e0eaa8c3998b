//! Role management and role permission assignment.

use serde::{Deserialize, Serialize};

use super::{ListRequest, record_path, relation_member_path, relation_path};
use crate::Client;
use crate::error::Result;
use crate::types::{Permission, Role};

const COLLECTION: &str = "roles";

/// Client for the `/roles` collection.
#[derive(Clone)]
pub struct RolesClient {
    client: Client,
}

impl RolesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists roles, one page at a time.
    pub fn list(&self) -> ListRequest<Role> {
        ListRequest::new(self.client.clone(), COLLECTION)
    }

    /// Creates a role.
    pub async fn create(&self, request: CreateRoleRequest) -> Result<Role> {
        self.client
            .inner()
            .post("/roles", &request)
            .await?
            .into_record()
    }

    /// Gets a role by ID.
    pub async fn get(&self, role_id: impl AsRef<str>) -> Result<Role> {
        let path = record_path(COLLECTION, role_id.as_ref());
        self.client.inner().get(&path).await?.into_record()
    }

    /// Updates a role. Only the fields set on `request` are sent.
    pub async fn update(&self, role_id: impl AsRef<str>, request: UpdateRoleRequest) -> Result<Role> {
        let path = record_path(COLLECTION, role_id.as_ref());
        self.client.inner().put(&path, &request).await?.into_record()
    }

    /// Deletes a role.
    pub async fn delete(&self, role_id: impl AsRef<str>) -> Result<()> {
        let path = record_path(COLLECTION, role_id.as_ref());
        self.client.inner().delete(&path).await?.into_unit()
    }

    /// Grants a permission to a role.
    pub async fn assign_permission(
        &self,
        role_id: impl AsRef<str>,
        permission_id: impl Into<String>,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct AssignPermissionBody {
            permission_id: String,
        }
        let path = relation_path(COLLECTION, role_id.as_ref(), "permissions");
        let body = AssignPermissionBody {
            permission_id: permission_id.into(),
        };
        self.client.inner().post(&path, &body).await?.into_unit()
    }

    /// Revokes a permission from a role.
    pub async fn remove_permission(
        &self,
        role_id: impl AsRef<str>,
        permission_id: impl AsRef<str>,
    ) -> Result<()> {
        let path = relation_member_path(
            COLLECTION,
            role_id.as_ref(),
            "permissions",
            permission_id.as_ref(),
        );
        self.client.inner().delete(&path).await?.into_unit()
    }

    /// Lists the permissions granted to a role.
    pub async fn permissions(&self, role_id: impl AsRef<str>) -> Result<Vec<Permission>> {
        let path = relation_path(COLLECTION, role_id.as_ref(), "permissions");
        self.client.inner().get(&path).await?.into_list()
    }
}

impl std::fmt::Debug for RolesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RolesClient").finish_non_exhaustive()
    }
}

/// Request to create a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    /// Role name.
    pub name: String,
    /// Role description.
    #[serde(default)]
    pub description: String,
}

impl CreateRoleRequest {
    /// Creates a request with the given name and an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update of a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateRoleRequest {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
