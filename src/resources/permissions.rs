//! Permission management.

use serde::{Deserialize, Serialize};

use super::{ListRequest, record_path};
use crate::Client;
use crate::error::Result;
use crate::types::Permission;

const COLLECTION: &str = "permissions";

/// Client for the `/permissions` collection.
///
/// Permissions are granted through roles; see
/// [`RolesClient::assign_permission`](super::RolesClient::assign_permission).
#[derive(Clone)]
pub struct PermissionsClient {
    client: Client,
}

impl PermissionsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists permissions, one page at a time.
    pub fn list(&self) -> ListRequest<Permission> {
        ListRequest::new(self.client.clone(), COLLECTION)
    }

    /// Creates a permission.
    ///
    /// ```rust,no_run
    /// use aras_auth::CreatePermissionRequest;
    ///
    /// # async fn run(client: aras_auth::Client) -> aras_auth::Result<()> {
    /// let permission = client
    ///     .permissions()
    ///     .create(CreatePermissionRequest::new("invoices", "approve"))
    ///     .await?;
    /// assert_eq!(permission.key(), "invoices:approve");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: CreatePermissionRequest) -> Result<Permission> {
        self.client
            .inner()
            .post("/permissions", &request)
            .await?
            .into_record()
    }

    /// Gets a permission by ID.
    pub async fn get(&self, permission_id: impl AsRef<str>) -> Result<Permission> {
        let path = record_path(COLLECTION, permission_id.as_ref());
        self.client.inner().get(&path).await?.into_record()
    }

    /// Updates a permission. Only the fields set on `request` are sent.
    pub async fn update(
        &self,
        permission_id: impl AsRef<str>,
        request: UpdatePermissionRequest,
    ) -> Result<Permission> {
        let path = record_path(COLLECTION, permission_id.as_ref());
        self.client.inner().put(&path, &request).await?.into_record()
    }

    /// Deletes a permission.
    pub async fn delete(&self, permission_id: impl AsRef<str>) -> Result<()> {
        let path = record_path(COLLECTION, permission_id.as_ref());
        self.client.inner().delete(&path).await?.into_unit()
    }
}

impl std::fmt::Debug for PermissionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionsClient").finish_non_exhaustive()
    }
}

/// Request to create a permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePermissionRequest {
    /// Resource name.
    pub resource: String,
    /// Action name.
    pub action: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Initial active flag; the service default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreatePermissionRequest {
    /// Creates a request for `action` on `resource`.
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
            description: String::new(),
            is_active: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial active flag.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Partial update of a permission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePermissionRequest {
    /// New resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// New action name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdatePermissionRequest {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resource name.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Sets the action name.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}
