//! Permission checks.

use serde::{Deserialize, Serialize};

use crate::Client;
use crate::error::Result;
use crate::types::decode_record;

#[derive(Serialize)]
struct CheckPermissionBody<'a> {
    user_id: &'a str,
    resource: &'a str,
    action: &'a str,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct CheckPermissionData {
    has_permission: bool,
}

impl Client {
    /// Asks the service whether `user_id` may perform `action` on
    /// `resource`.
    ///
    /// A denial is `Ok(false)`, not an error. A success reply without a
    /// `has_permission` field also counts as a denial.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidResponse`](crate::ErrorKind::InvalidResponse)
    /// error if `data` is not an object or `has_permission` is not a
    /// boolean.
    ///
    /// ```rust,no_run
    /// # async fn run(client: aras_auth::Client) -> aras_auth::Result<()> {
    /// if client.check_permission("usr_123", "invoices", "approve").await? {
    ///     println!("approved");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check_permission(
        &self,
        user_id: impl AsRef<str>,
        resource: impl AsRef<str>,
        action: impl AsRef<str>,
    ) -> Result<bool> {
        let body = CheckPermissionBody {
            user_id: user_id.as_ref(),
            resource: resource.as_ref(),
            action: action.as_ref(),
        };
        let data: CheckPermissionData = match self
            .inner()
            .post("/authz/check", &body)
            .await?
            .into_data()?
        {
            Some(serde_json::Value::Null) | None => CheckPermissionData::default(),
            Some(value) => decode_record(value)?,
        };
        tracing::debug!(
            resource = body.resource,
            action = body.action,
            allowed = data.has_permission,
            "permission checked"
        );
        Ok(data.has_permission)
    }
}
