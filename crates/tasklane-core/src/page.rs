//! Pagination request and response envelope types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default page size for list/search operations.
const fn default_page_size() -> u32 {
    10
}

/// A zero-based page request.
///
/// `offset()` translates to SQL `OFFSET` as `page * size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageRequest {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_page_size(),
        }
    }
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Row offset of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

/// A bounded slice of an ordered result set plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index this slice corresponds to.
    pub page: u32,
    /// Requested page size (not necessarily `content.len()`).
    pub size: u32,
    /// Total number of matching elements across all pages.
    pub total_elements: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    /// Total page count implied by `total_elements` and `size`.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size as u64)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 75);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<u32> = Page::new(vec![], &PageRequest::new(0, 10), 31);
        assert_eq!(page.total_pages(), 4);

        let exact: Page<u32> = Page::new(vec![], &PageRequest::new(0, 10), 30);
        assert_eq!(exact.total_pages(), 3);

        let empty: Page<u32> = Page::new(vec![], &PageRequest::new(0, 10), 0);
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn default_request_is_first_page() {
        let req = PageRequest::default();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 10);
    }
}
