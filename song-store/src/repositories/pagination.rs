//! Pagination types for song list queries.

use serde::{Deserialize, Serialize};

/// Rows returned by a list query when the caller does not ask for a size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Upper bound on the page size a caller may request. Enforced by the
/// handler layer before a request reaches the repository.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Window over the filtered song list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Row offset into the filtered result set. The wire-level
    /// `page_current` parameter is applied directly as a row offset, not
    /// multiplied by the page size; existing clients depend on this.
    pub page: u32,
    /// Number of rows per request.
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// The SQL OFFSET value.
    pub fn offset(&self) -> u32 {
        self.page
    }

    /// The SQL LIMIT value.
    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
