//! Page sizes and derived page views

use super::error::ViewError;
use crate::points::Point;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Number of points per page
///
/// Only the four sizes offered by the list surface exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Three,
    #[default]
    Six,
    Nine,
    Twelve,
}

impl PageSize {
    /// All options in ascending order
    pub const ALL: [Self; 4] = [Self::Three, Self::Six, Self::Nine, Self::Twelve];

    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Six => 6,
            Self::Nine => 9,
            Self::Twelve => 12,
        }
    }

    /// Closest option to an arbitrary request
    #[must_use]
    pub fn nearest(requested: usize) -> Self {
        Self::ALL
            .into_iter()
            .min_by_key(|size| size.get().abs_diff(requested))
            .unwrap_or_default()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ViewError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(ViewError::InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// `max(1, ceil(filtered / page_size))`
#[must_use]
pub fn total_pages(filtered: usize, page_size: PageSize) -> usize {
    filtered.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested page into `[1, total_pages]`
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// A point together with its position in the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageEntry<'a> {
    /// Position in the store, the point's only identity
    pub index: usize,
    pub point: &'a Point,
}

/// What the list surface should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// The session has no points yet
    NoPoints,
    /// Points exist but none match the search term
    NoMatches,
    /// At least one point is visible
    Showing,
}

/// Result of deriving a view from the store
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    filtered: Vec<PageEntry<'a>>,
    visible: Range<usize>,
    total_points: usize,
    current_page: usize,
    total_pages: usize,
}

impl<'a> PageView<'a> {
    pub(crate) fn new(
        filtered: Vec<PageEntry<'a>>,
        total_points: usize,
        page_size: PageSize,
        requested_page: usize,
    ) -> Self {
        let total_pages = total_pages(filtered.len(), page_size);
        let current_page = clamp_page(requested_page, total_pages);
        let start = (current_page - 1) * page_size.get();
        let end = (start + page_size.get()).min(filtered.len());

        Self {
            filtered,
            visible: start..end,
            total_points,
            current_page,
            total_pages,
        }
    }

    /// Every point matching the search term, in store order
    #[must_use]
    pub fn filtered(&self) -> &[PageEntry<'a>] {
        &self.filtered
    }

    /// The slice of `filtered` on the current page
    #[must_use]
    pub fn visible(&self) -> &[PageEntry<'a>] {
        &self.filtered[self.visible.clone()]
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Current page after clamping, 1-based
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether pagination controls are worth showing
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn status(&self) -> ViewStatus {
        if self.total_points == 0 {
            ViewStatus::NoPoints
        } else if self.filtered.is_empty() {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Showing
        }
    }
}
