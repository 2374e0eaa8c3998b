//! Testing utilities for code that depends on the ArasAuth client.
//!
//! - [`PermissionChecker`]: object-safe trait over permission checks,
//!   implemented by [`Client`](crate::Client)
//! - [`MockPermissionChecker`]: in-process checker with expectations
//!
//! ## Quick Start
//!
//! ```rust
//! use aras_auth::testing::{MockPermissionChecker, PermissionChecker};
//!
//! async fn can_approve(checker: &dyn PermissionChecker, user_id: &str) -> bool {
//!     checker.check_permission(user_id, "invoices", "approve").await.unwrap_or(false)
//! }
//!
//! # tokio_test_block(async {
//! let mock = MockPermissionChecker::new().expect_check("usr_1", "invoices", "approve", true);
//! assert!(can_approve(&mock, "usr_1").await);
//! mock.verify();
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod checker;
mod mock;

pub use checker::PermissionChecker;
pub use mock::MockPermissionChecker;
