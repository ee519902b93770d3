//! Pagination over a filtered, sorted listing.

use serde::{Deserialize, Serialize};

/// Pagination info for one page of results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages; 0 for an empty listing.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = (total + per_page - 1) / per_page;

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1 && total_pages > 0,
        }
    }

    /// Offset of this page's first item into the full listing.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Page numbers for display (e.g. `[3, 4, 5, 6, 7]`).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 12, 0)
    }
}

/// The contiguous slice for a 1-based page.
///
/// Out-of-range pages (including page <= 0) return an empty slice
/// rather than erroring; callers are expected to reset to page 1 when
/// the underlying set changes.
pub fn page_slice<T>(items: &[T], page: i64, per_page: i64) -> &[T] {
    if page < 1 || per_page < 1 {
        return &[];
    }
    let start = ((page - 1) * per_page) as usize;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page as usize).min(items.len());
    &items[start..end]
}
