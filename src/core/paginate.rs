//! Pagination utilities
//!
//! Splits an ordered sequence into fixed-size pages and computes page-count
//! metadata. Pages are 1-based; a page past the end is a defined boundary
//! (empty slice), not an error.

use serde::Serialize;

/// Page size used by the listing surfaces unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One page of an ordered result set plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The records on this page
    pub items: Vec<T>,

    /// Pagination metadata
    pub meta: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub per_page: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages; 0 when the sequence is empty
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    /// Compute metadata for a page over `total` items.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(per_page) };
        let start = (page - 1) * per_page;

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: start + per_page < total,
            has_prev: page > 1,
        }
    }

    /// The largest page a navigation control should offer: `max(total_pages, 1)`.
    /// Even an empty result set keeps page 1 addressable.
    pub fn last_navigable_page(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Whether `page` is within the navigable range `1..=last_navigable_page()`.
    pub fn is_navigable(&self, page: usize) -> bool {
        (1..=self.last_navigable_page()).contains(&page)
    }
}

/// Slice out the 1-based `page` of `items`, clipped to bounds.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let meta = PageMeta::new(page, per_page, items.len());
    let start = (meta.page - 1) * meta.per_page;
    let items = items
        .into_iter()
        .skip(start)
        .take(meta.per_page)
        .collect();

    Page { items, meta }
}
