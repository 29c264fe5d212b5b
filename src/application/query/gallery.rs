// SPDX-License-Identifier: MPL-2.0
//! Gallery view-model for filtered, paged content display.
//!
//! This module provides a [`GalleryView`] that owns the full item collection
//! of one gallery (photos or videos) together with its filter and paging
//! state, and answers the single question "what should be shown right now".
//! Each gallery on a page is its own instance; nothing is shared between
//! galleries.
//!
//! Filtering and paging are pure reads over an unchanged backing sequence:
//! the collection is only ever replaced wholesale by [`GalleryView::load`],
//! never mutated in place.

use crate::domain::media::{GalleryFilter, MediaItem};

/// Gallery state snapshot for UI rendering.
///
/// Contains everything the presentation layer needs to render counters and
/// the load-more affordance without direct access to the item collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryInfo {
    /// Total number of items in the backing collection.
    pub total_count: usize,
    /// Number of items matching the active filter.
    /// Same as `total_count` when no filter is active.
    pub matching_count: usize,
    /// Number of items currently visible.
    pub visible_count: usize,
    /// Whether more matching items remain beyond the visible window.
    pub has_more: bool,
    /// Whether a filter is currently active.
    pub filter_active: bool,
}

/// Owns one gallery's collection, active filter, and visible window.
///
/// The visible window always starts at the first item matching the active
/// filter and grows by `page_size` per [`show_more`](Self::show_more) call,
/// capped at the filtered total. Changing the filter resets the window to
/// the top of the newly filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    /// Full collection in load order. Replaced wholesale, never mutated.
    items: Vec<MediaItem>,
    /// Active membership predicate.
    filter: GalleryFilter,
    /// Number of items currently visible. Always <= matching count.
    visible_count: usize,
    /// Window growth increment per load-more request.
    page_size: usize,
}

impl GalleryView {
    /// Creates an empty gallery with the given page size.
    ///
    /// A zero page size is clamped to 1 so the window can always grow.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filter: GalleryFilter::All,
            visible_count: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the backing collection with a freshly loaded one.
    ///
    /// Resets the filter to [`GalleryFilter::All`] and the visible window to
    /// the first page. An empty collection is valid and yields an empty view.
    pub fn load(&mut self, items: Vec<MediaItem>) {
        self.items = items;
        self.filter = GalleryFilter::All;
        self.visible_count = self.page_size.min(self.items.len());
    }

    /// Sets the active filter and resets the visible window to the top of
    /// the newly filtered set.
    ///
    /// Returns the newly visible subsequence so callers can re-render
    /// without a second call. A filter matching nothing (e.g. an unknown
    /// category label) is valid and yields an empty view.
    pub fn set_filter(&mut self, filter: GalleryFilter) -> Vec<&MediaItem> {
        self.filter = filter;
        self.visible_count = self.page_size.min(self.matching_count());
        self.visible_items()
    }

    /// Grows the visible window by one page, capped at the filtered total.
    ///
    /// Calls past the end are no-ops that keep returning the same full
    /// filtered set.
    pub fn show_more(&mut self) -> Vec<&MediaItem> {
        let matching = self.matching_count();
        self.visible_count = (self.visible_count + self.page_size).min(matching);
        self.visible_items()
    }

    /// Returns the currently visible subsequence: items matching the active
    /// filter, in original relative order, truncated to the visible window.
    ///
    /// Pure query; repeated calls with unchanged state return equal results.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .take(self.visible_count)
            .collect()
    }

    /// Returns `true` if more matching items remain beyond the visible window.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible_count < self.matching_count()
    }

    /// Returns a rendering snapshot of the current gallery state.
    #[must_use]
    pub fn info(&self) -> GalleryInfo {
        let matching_count = self.matching_count();
        GalleryInfo {
            total_count: self.items.len(),
            matching_count,
            visible_count: self.visible_count,
            has_more: self.visible_count < matching_count,
            filter_active: self.filter.is_active(),
        }
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    /// Returns the total number of items in the backing collection.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the backing collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Changes the page size for subsequent load-more requests.
    ///
    /// Does not shrink the currently visible window. Zero is clamped to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    fn matching_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .count()
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new(crate::config::defaults::DEFAULT_PHOTO_PAGE_SIZE)
    }
}
