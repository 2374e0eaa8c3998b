//! Paginated list responses.

use serde::{Deserialize, Serialize};

use super::null_as_default;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 20;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// One page of a paginated list.
///
/// Missing fields default to `items = []`, `total = 0`, `page = 1`,
/// `limit = 20`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// The items on this page, in server order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    /// The 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Maximum number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl<T> ListResponse<T> {
    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if items exist beyond this page.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.total
    }

    /// Returns an iterator over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListResponse<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
