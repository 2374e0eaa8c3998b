//! PermissionChecker trait for dependency injection.

use std::future::Future;
use std::pin::Pin;

use crate::{Client, Error};

/// Object-safe trait for permission checks.
///
/// Application code can take `&dyn PermissionChecker` (or
/// `Arc<dyn PermissionChecker>`) and receive the real [`Client`] in
/// production and a [`MockPermissionChecker`](super::MockPermissionChecker)
/// in tests.
///
/// Returns `Ok(true)` if allowed, `Ok(false)` if denied.
pub trait PermissionChecker: Send + Sync {
    /// Checks whether `user_id` may perform `action` on `resource`.
    fn check_permission<'a>(
        &'a self,
        user_id: &'a str,
        resource: &'a str,
        action: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, Error>> + Send + 'a>>;
}

impl PermissionChecker for Client {
    fn check_permission<'a>(
        &'a self,
        user_id: &'a str,
        resource: &'a str,
        action: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, Error>> + Send + 'a>> {
        Box::pin(Client::check_permission(self, user_id, resource, action))
    }
}
