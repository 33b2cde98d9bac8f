//! Interactive listing session
//!
//! Models the browsing state a catalog front end keeps while a visitor works
//! through the directory: the full filter panel, a quick practice-area
//! filter, free-text search, the active sort, and the current page. The
//! session owns the transition rules; the actual evaluation is delegated to
//! the shared filter/sort/paginate pipeline, so a UI embedding this type and
//! the HTTP endpoints agree on semantics by construction.

use super::filter::{FilterOptions, matches_practice_areas};
use super::model::{Lawyer, PracticeArea};
use super::paginate::{DEFAULT_PAGE_SIZE, Page, paginate};
use super::sort::{SortKey, sort_lawyers};

/// Browsing state for one visitor session.
///
/// Any change to the effective filter set (panel, quick area, or search
/// term) resets the page to 1. Changing the sort keeps the current page.
#[derive(Debug, Clone)]
pub struct ListingSession {
    filters: FilterOptions,
    quick_area: Option<PracticeArea>,
    sort: SortKey,
    page: usize,
    per_page: usize,
}

impl ListingSession {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(per_page: usize) -> Self {
        Self {
            filters: FilterOptions::default(),
            quick_area: None,
            sort: SortKey::Relevance,
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn quick_area(&self) -> Option<PracticeArea> {
        self.quick_area
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the filter panel. Resets to page 1.
    pub fn set_filters(&mut self, filters: FilterOptions) {
        self.filters = filters;
        self.page = 1;
    }

    /// Set or clear the quick practice-area filter. Resets to page 1.
    pub fn set_quick_area(&mut self, area: Option<PracticeArea>) {
        self.quick_area = area;
        self.page = 1;
    }

    /// Set the search term (`None` clears it). Resets to page 1.
    pub fn set_search(&mut self, query: Option<String>) {
        self.filters.query = query;
        self.page = 1;
    }

    /// Drop every active filter and the search term. Resets to page 1.
    pub fn clear_filters(&mut self) {
        self.filters = FilterOptions::default();
        self.quick_area = None;
        self.page = 1;
    }

    /// Change the sort order. Keeps the current page.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Navigate to a page. Pages past the end are legal and yield an empty
    /// slice on the next [`run`](Self::run).
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Evaluate the session against a snapshot of the catalog:
    /// filter panel, then quick area, then sort, then paginate.
    pub fn run(&self, lawyers: Vec<Lawyer>) -> Page<Lawyer> {
        let mut result = self.filters.apply(lawyers);
        if let Some(area) = self.quick_area {
            result.retain(|lawyer| matches_practice_areas(lawyer, &[area]));
        }
        sort_lawyers(&mut result, self.sort);
        paginate(result, self.page, self.per_page)
    }
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Page numbers a pagination strip should render: at most five, anchored to
/// the start near the beginning, to the end near the last page, and centered
/// on the current page otherwise.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    if total_pages <= 5 {
        (1..=total_pages).collect()
    } else if current <= 3 {
        (1..=5).collect()
    } else if current >= total_pages - 2 {
        (total_pages - 4..=total_pages).collect()
    } else {
        (current - 2..=current + 2).collect()
    }
}
