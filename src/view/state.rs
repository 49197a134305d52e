//! Search and pagination state
//!
//! `ViewState` holds four inputs (surface, search term, page size, current
//! page) and nothing else. Everything shown to the user is *derived* from those
//! inputs plus the point slice via [`ViewState::derive`], so the two surfaces
//! always agree.
//!
//! # Rules
//!
//! - Changing the search term or the page size resets the page to 1
//! - Page requests are clamped into `[1, total_pages]`, never rejected
//! - A stored page that became too large (e.g. after a narrower search) is
//!   corrected on the next derivation
//! - Switching surfaces leaves paging and search untouched

use super::Surface;
use super::page::{PageEntry, PageSize, PageView, clamp_page, total_pages};
use crate::points::Point;
use tracing::debug;

/// Presentation state shared by the map and list surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    surface: Surface,
    search_term: String,
    page_size: PageSize,
    current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ViewState {
    /// Fresh state on the map surface, no search, first page
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            surface: Surface::Map,
            search_term: String::new(),
            page_size,
            current_page: 1,
        }
    }

    #[must_use]
    pub const fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Stored page; may exceed the valid range until the next derivation
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    pub const fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Replace the search term; a different term resets paging to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search_term {
            self.search_term = term;
            self.current_page = 1;
        }
    }

    /// Change the page size; a different size resets paging to page 1
    pub const fn set_page_size(&mut self, size: PageSize) {
        if size.get() != self.page_size.get() {
            self.page_size = size;
            self.current_page = 1;
        }
    }

    /// Change the page size from an arbitrary number, snapping to the nearest
    /// offered size
    pub fn request_page_size(&mut self, requested: usize) -> PageSize {
        let size = PageSize::nearest(requested);
        if size.get() != requested {
            debug!("Page size {requested} snapped to {size}");
        }
        self.set_page_size(size);
        size
    }

    /// Jump to page `n`, clamped into `[1, total_pages]`
    ///
    /// Returns the page actually selected.
    pub fn set_page(&mut self, n: usize, points: &[Point]) -> usize {
        let total = self.total_pages(points);
        let page = clamp_page(n, total);
        if page != n {
            debug!("Page {n} clamped to {page} of {total}");
        }
        self.current_page = page;
        page
    }

    /// Advance one page, staying on the last page at the end
    pub fn next_page(&mut self, points: &[Point]) -> usize {
        self.set_page(self.current_page.saturating_add(1), points)
    }

    /// Go back one page, staying on page 1 at the start
    pub fn prev_page(&mut self, points: &[Point]) -> usize {
        self.set_page(self.current_page.saturating_sub(1), points)
    }

    /// Pull a stale stored page back into range
    pub fn reconcile(&mut self, points: &[Point]) {
        let page = clamp_page(self.current_page, self.total_pages(points));
        if page != self.current_page {
            debug!("Stored page {} corrected to {page}", self.current_page);
            self.current_page = page;
        }
    }

    /// Number of pages for the current search over `points`
    #[must_use]
    pub fn total_pages(&self, points: &[Point]) -> usize {
        total_pages(self.filter(points).len(), self.page_size)
    }

    /// Points matching the search term, in store order
    #[must_use]
    pub fn filter<'a>(&self, points: &'a [Point]) -> Vec<PageEntry<'a>> {
        let needle = self.search_term.to_lowercase();
        points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.name_contains_lowercase(&needle))
            .map(|(index, point)| PageEntry { index, point })
            .collect()
    }

    /// Derive the filtered list and the visible page
    ///
    /// Pure: the result depends only on `points` and the four state fields.
    #[must_use]
    pub fn derive<'a>(&self, points: &'a [Point]) -> PageView<'a> {
        PageView::new(
            self.filter(points),
            points.len(),
            self.page_size,
            self.current_page,
        )
    }
}
