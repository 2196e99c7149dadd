//! Pagination math
//!
//! Maps `(current_page, page_size, total_count)` to a contiguous slice of the
//! catalog and computes the links shown by the paginator. Nothing here fails:
//! an out-of-range page simply yields an empty slice.

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::error::{PortalError, PortalResult};

/// Default number of customers per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pages always shown at each end of the paginator
pub const DEFAULT_MARGIN_PAGES: usize = 2;

/// Pages shown around the current page
pub const DEFAULT_PAGE_RANGE: usize = 3;

/// Number of records per page, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> PortalResult<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PortalError::InvalidPageSize(size))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

/// A single entry of the paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// Zero-based page index
    Page(usize),
    /// Collapsed gap ("…")
    Break,
}

/// Pagination snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: PageSize,
    pub total_count: usize,
}

impl Pagination {
    #[must_use]
    pub fn new(current_page: usize, page_size: PageSize, total_count: usize) -> Self {
        Self {
            current_page,
            page_size,
            total_count,
        }
    }

    /// Index of the first record on the current page
    #[must_use]
    pub fn offset(&self) -> usize {
        self.current_page.saturating_mul(self.page_size.get())
    }

    /// `ceil(total_count / page_size)`
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size.get())
    }

    /// Record indices visible on the current page, clamped to `total_count`
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset().min(self.total_count);
        let end = self
            .offset()
            .saturating_add(self.page_size.get())
            .min(self.total_count);
        start..end
    }

    /// Slice `items` down to the current page
    #[must_use]
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 0 && self.page_count() > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page.saturating_add(1) < self.page_count()
    }

    /// Previous page index, clamped to the valid range
    #[must_use]
    pub fn previous_page(&self) -> usize {
        let last = self.page_count().saturating_sub(1);
        self.current_page.min(last).saturating_sub(1)
    }

    /// Next page index, clamped to the valid range
    #[must_use]
    pub fn next_page(&self) -> usize {
        let last = self.page_count().saturating_sub(1);
        self.current_page.saturating_add(1).min(last)
    }

    /// Paginator links with the default margins
    #[must_use]
    pub fn links(&self) -> Vec<PageLink> {
        self.page_links(DEFAULT_MARGIN_PAGES, DEFAULT_PAGE_RANGE)
    }

    /// Paginator links: `margin_pages` at each end, a window of `page_range`
    /// pages around the current one, and one `Break` per collapsed gap.
    #[must_use]
    pub fn page_links(&self, margin_pages: usize, page_range: usize) -> Vec<PageLink> {
        let page_count = self.page_count();
        if page_count <= page_range {
            return (0..page_count).map(PageLink::Page).collect();
        }

        let current = self.current_page.min(page_count - 1);
        let window_end = current
            .saturating_sub(page_range / 2)
            .saturating_add(page_range)
            .min(page_count);
        let window = window_end.saturating_sub(page_range)..window_end;
        let tail_start = page_count.saturating_sub(margin_pages);

        let mut links = Vec::with_capacity(page_count.min(page_range + 2 * margin_pages + 2));
        for index in 0..page_count {
            if index < margin_pages || index >= tail_start || window.contains(&index) {
                links.push(PageLink::Page(index));
            } else if links.last() != Some(&PageLink::Break) {
                links.push(PageLink::Break);
            }
        }
        links
    }
}
