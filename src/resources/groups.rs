//! Group management, membership, and group role assignment.

use serde::{Deserialize, Serialize};

use super::{ListRequest, record_path, relation_member_path, relation_path};
use crate::Client;
use crate::error::Result;
use crate::types::{Group, Role, User};

const COLLECTION: &str = "groups";

/// Client for the `/groups` collection.
///
/// ## Example
///
/// ```rust,no_run
/// use aras_auth::CreateGroupRequest;
///
/// # async fn run(client: aras_auth::Client) -> aras_auth::Result<()> {
/// let groups = client.groups();
/// let group = groups
///     .create(CreateGroupRequest::new("engineering").with_description("Backend and infra"))
///     .await?;
/// groups.add_member(&group.id, "usr_123").await?;
/// groups.assign_role(&group.id, "role_deployer").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GroupsClient {
    client: Client,
}

impl GroupsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists groups, one page at a time.
    pub fn list(&self) -> ListRequest<Group> {
        ListRequest::new(self.client.clone(), COLLECTION)
    }

    /// Creates a group.
    pub async fn create(&self, request: CreateGroupRequest) -> Result<Group> {
        self.client
            .inner()
            .post("/groups", &request)
            .await?
            .into_record()
    }

    /// Gets a group by ID.
    pub async fn get(&self, group_id: impl AsRef<str>) -> Result<Group> {
        let path = record_path(COLLECTION, group_id.as_ref());
        self.client.inner().get(&path).await?.into_record()
    }

    /// Updates a group. Only the fields set on `request` are sent.
    pub async fn update(
        &self,
        group_id: impl AsRef<str>,
        request: UpdateGroupRequest,
    ) -> Result<Group> {
        let path = record_path(COLLECTION, group_id.as_ref());
        self.client.inner().put(&path, &request).await?.into_record()
    }

    /// Deletes a group.
    pub async fn delete(&self, group_id: impl AsRef<str>) -> Result<()> {
        let path = record_path(COLLECTION, group_id.as_ref());
        self.client.inner().delete(&path).await?.into_unit()
    }

    /// Adds a user to a group.
    pub async fn add_member(
        &self,
        group_id: impl AsRef<str>,
        user_id: impl Into<String>,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct AddMemberBody {
            user_id: String,
        }
        let path = relation_path(COLLECTION, group_id.as_ref(), "members");
        let body = AddMemberBody {
            user_id: user_id.into(),
        };
        self.client.inner().post(&path, &body).await?.into_unit()
    }

    /// Removes a user from a group.
    pub async fn remove_member(
        &self,
        group_id: impl AsRef<str>,
        user_id: impl AsRef<str>,
    ) -> Result<()> {
        let path = relation_member_path(COLLECTION, group_id.as_ref(), "members", user_id.as_ref());
        self.client.inner().delete(&path).await?.into_unit()
    }

    /// Lists the members of a group.
    pub async fn members(&self, group_id: impl AsRef<str>) -> Result<Vec<User>> {
        let path = relation_path(COLLECTION, group_id.as_ref(), "members");
        self.client.inner().get(&path).await?.into_list()
    }

    /// Assigns a role to every member of a group.
    pub async fn assign_role(
        &self,
        group_id: impl AsRef<str>,
        role_id: impl Into<String>,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct AssignRoleBody {
            role_id: String,
        }
        let path = relation_path(COLLECTION, group_id.as_ref(), "roles");
        let body = AssignRoleBody {
            role_id: role_id.into(),
        };
        self.client.inner().post(&path, &body).await?.into_unit()
    }

    /// Removes a role from a group.
    pub async fn remove_role(
        &self,
        group_id: impl AsRef<str>,
        role_id: impl AsRef<str>,
    ) -> Result<()> {
        let path = relation_member_path(COLLECTION, group_id.as_ref(), "roles", role_id.as_ref());
        self.client.inner().delete(&path).await?.into_unit()
    }

    /// Lists the roles assigned to a group.
    pub async fn roles(&self, group_id: impl AsRef<str>) -> Result<Vec<Role>> {
        let path = relation_path(COLLECTION, group_id.as_ref(), "roles");
        self.client.inner().get(&path).await?.into_list()
    }
}

impl std::fmt::Debug for GroupsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupsClient").finish_non_exhaustive()
    }
}

/// Request to create a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    /// Group name.
    pub name: String,
    /// Group description.
    #[serde(default)]
    pub description: String,
}

impl CreateGroupRequest {
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

/// Partial update of a group. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGroupRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateGroupRequest {
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
