//! Resource sub-clients.
//!
//! Each sub-client wraps one collection of the service:
//!
//! | Sub-client | Collection | Obtained via |
//! |---|---|---|
//! | [`UsersClient`] | `/users` | [`Client::users`] |
//! | [`GroupsClient`] | `/groups` | [`Client::groups`] |
//! | [`RolesClient`] | `/roles` | [`Client::roles`] |
//! | [`PermissionsClient`] | `/permissions` | [`Client::permissions`] |
//!
//! Sub-clients are cheap to create and hold a clone of the [`Client`], so
//! they share its session token.

mod groups;
mod permissions;
mod roles;
mod users;

pub use groups::{CreateGroupRequest, GroupsClient, UpdateGroupRequest};
pub use permissions::{CreatePermissionRequest, PermissionsClient, UpdatePermissionRequest};
pub use roles::{CreateRoleRequest, RolesClient, UpdateRoleRequest};
pub use users::{UpdateUserRequest, UsersClient};

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;

use serde::de::DeserializeOwned;

use crate::Client;
use crate::client::inner::segment;
use crate::error::Result;
use crate::types::ListResponse;

/// Default page requested by list calls.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size requested by list calls.
pub const DEFAULT_LIMIT: u32 = 20;

/// Request for one page of a collection.
///
/// Created by the `list()` method of a sub-client; await it to send.
/// Both `page` and `limit` are always sent.
///
/// ```rust,no_run
/// # async fn run(client: aras_auth::Client) -> aras_auth::Result<()> {
/// let page = client.groups().list().page(2).limit(10).await?;
/// if page.has_next() {
///     println!("more than {} groups", page.page * page.limit);
/// }
/// # Ok(())
/// # }
/// ```
#[must_use = "list requests do nothing unless awaited"]
pub struct ListRequest<T> {
    client: Client,
    collection: &'static str,
    page: u32,
    limit: u32,
    _item: PhantomData<fn() -> T>,
}

impl<T> ListRequest<T> {
    pub(crate) fn new(client: Client, collection: &'static str) -> Self {
        Self {
            client,
            collection,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            _item: PhantomData,
        }
    }

    /// Sets the 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the maximum number of items per page.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl<T> ListRequest<T>
where
    T: DeserializeOwned,
{
    /// Sends the request.
    ///
    /// Awaiting the request directly does the same; this form is useful
    /// where a named future is needed.
    pub async fn execute(self) -> Result<ListResponse<T>> {
        let path = format!("/{}", self.collection);
        let query = [("page", self.page.to_string()), ("limit", self.limit.to_string())];
        self.client
            .inner()
            .get_with_query(&path, &query)
            .await?
            .into_page(self.collection)
    }
}

impl<T> IntoFuture for ListRequest<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Result<ListResponse<T>>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

impl<T> std::fmt::Debug for ListRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListRequest")
            .field("collection", &self.collection)
            .field("page", &self.page)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// Builds `/{collection}/{id}` with `id` percent-encoded.
pub(crate) fn record_path(collection: &str, id: &str) -> String {
    format!("/{}/{}", collection, segment(id))
}

/// Builds `/{collection}/{id}/{relation}`.
pub(crate) fn relation_path(collection: &str, id: &str, relation: &str) -> String {
    format!("/{}/{}/{}", collection, segment(id), relation)
}

/// Builds `/{collection}/{id}/{relation}/{other_id}`.
pub(crate) fn relation_member_path(
    collection: &str,
    id: &str,
    relation: &str,
    other_id: &str,
) -> String {
    format!(
        "/{}/{}/{}/{}",
        collection,
        segment(id),
        relation,
        segment(other_id)
    )
}
