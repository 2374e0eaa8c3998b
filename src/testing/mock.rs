//! MockPermissionChecker for testing with expectations.

use std::{future::Future, pin::Pin, sync::Arc};

use parking_lot::Mutex;

use crate::{Error, testing::PermissionChecker};

/// A mock permission checker for tests.
///
/// Answers checks from registered expectations, falling back to a default
/// decision, and records every call for later verification.
///
/// ## Example
///
/// ```rust
/// use aras_auth::testing::MockPermissionChecker;
///
/// let mock = MockPermissionChecker::new()
///     .expect_check("usr_alice", "invoices", "approve", true)
///     .expect_check("usr_bob", "invoices", "approve", false);
///
/// // Exercise code under test with `&mock`, then:
/// // mock.verify();
/// ```
#[derive(Clone)]
pub struct MockPermissionChecker {
    expectations: Arc<Mutex<Vec<Expectation>>>,
    calls: Arc<Mutex<Vec<Call>>>,
    default_allow: bool,
}

#[derive(Debug, Clone)]
struct Expectation {
    user_id: String,
    resource: String,
    action: String,
    result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Call {
    user_id: String,
    resource: String,
    action: String,
}

impl Expectation {
    fn matches(&self, user_id: &str, resource: &str, action: &str) -> bool {
        self.user_id == user_id && self.resource == resource && self.action == action
    }
}

impl MockPermissionChecker {
    /// Creates a mock that denies anything without an expectation.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            default_allow: false,
        }
    }

    /// Creates a mock that allows anything without an expectation.
    pub fn allow_all() -> Self {
        Self {
            default_allow: true,
            ..Self::new()
        }
    }

    /// Creates a mock that denies anything without an expectation.
    pub fn deny_all() -> Self {
        Self::new()
    }

    /// Adds an expectation for a check call.
    ///
    /// The first matching expectation decides the result.
    #[must_use]
    pub fn expect_check(
        self,
        user_id: impl Into<String>,
        resource: impl Into<String>,
        action: impl Into<String>,
        result: bool,
    ) -> Self {
        self.expectations.lock().push(Expectation {
            user_id: user_id.into(),
            resource: resource.into(),
            action: action.into(),
            result,
        });
        self
    }

    /// Asserts that every expectation was exercised at least once.
    ///
    /// # Panics
    ///
    /// Panics if any expectation was never matched by a call.
    pub fn verify(&self) {
        let expectations = self.expectations.lock();
        let calls = self.calls.lock();

        for expectation in expectations.iter() {
            let called = calls
                .iter()
                .any(|c| expectation.matches(&c.user_id, &c.resource, &c.action));
            assert!(
                called,
                "expected check_permission({}, {}, {}) was never called",
                expectation.user_id, expectation.resource, expectation.action
            );
        }
    }

    /// Returns the number of check calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns how often `user_id` was checked for `action` on `resource`.
    pub fn calls_for(&self, user_id: &str, resource: &str, action: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.user_id == user_id && c.resource == resource && c.action == action)
            .count()
    }

    /// Clears all expectations and recorded calls.
    pub fn reset(&self) {
        self.expectations.lock().clear();
        self.calls.lock().clear();
    }

    fn decide(&self, user_id: &str, resource: &str, action: &str) -> bool {
        self.calls.lock().push(Call {
            user_id: user_id.to_string(),
            resource: resource.to_string(),
            action: action.to_string(),
        });
        self.expectations
            .lock()
            .iter()
            .find(|e| e.matches(user_id, resource, action))
            .map_or(self.default_allow, |e| e.result)
    }
}

impl Default for MockPermissionChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockPermissionChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockPermissionChecker")
            .field("expectations", &self.expectations.lock().len())
            .field("calls", &self.calls.lock().len())
            .field("default_allow", &self.default_allow)
            .finish()
    }
}

impl PermissionChecker for MockPermissionChecker {
    fn check_permission<'a>(
        &'a self,
        user_id: &'a str,
        resource: &'a str,
        action: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<bool, Error>> + Send + 'a>> {
        let result = self.decide(user_id, resource, action);
        Box::pin(async move { Ok(result) })
    }
}
