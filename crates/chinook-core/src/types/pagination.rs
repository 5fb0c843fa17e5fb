//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;

/// Request parameters for paginated queries.
///
/// `page` is a 1-based page number, not a row offset. Positivity of both
/// fields is the controller layer's responsibility; the repositories take
/// the request as given. `page_size` is deliberately unbounded: an
/// arbitrarily large page is a valid request and the store executes it
/// as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Calculate the SQL `OFFSET` value: `(page - 1) * page_size`,
    /// saturating at `u64::MAX` so an unbounded page size stays a valid
    /// request instead of overflowing.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_for_first_page() {
        let page = PageRequest::new(1, 25);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 25);
    }

    #[test]
    fn test_offset_skips_preceding_pages() {
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(3, 2).offset(), 4);
        assert_eq!(PageRequest::new(7, 50).offset(), 300);
    }

    #[test]
    fn test_consecutive_pages_tile_without_overlap_or_gap() {
        // Page n ends exactly where page n+1 begins, for any page size.
        for size in [1u64, 2, 25, 1000] {
            for page in 1u64..=5 {
                let current = PageRequest::new(page, size);
                let next = PageRequest::new(page + 1, size);
                assert_eq!(current.offset() + current.limit(), next.offset());
            }
        }
    }

    #[test]
    fn test_page_size_is_not_clamped() {
        let page = PageRequest::new(1, u64::MAX);
        assert_eq!(page.limit(), u64::MAX);
        assert_eq!(page.offset(), 0);

        // A later page with an unbounded size saturates instead of
        // overflowing.
        let page = PageRequest::new(3, u64::MAX);
        assert_eq!(page.offset(), u64::MAX);
        assert_eq!(PageRequest::new(u64::MAX, u64::MAX).offset(), u64::MAX);
    }

    #[test]
    fn test_serde_defaults() {
        let page: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 25);

        let page: PageRequest = serde_json::from_str(r#"{"page":3,"page_size":2}"#).unwrap();
        assert_eq!(page.offset(), 4);
    }
}
