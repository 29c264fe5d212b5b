// SPDX-License-Identifier: MPL-2.0
//! Gallery filtering predicates for the domain layer.
//!
//! A [`GalleryFilter`] decides membership of a [`MediaItem`] in the visible
//! set. Filtering is permissive: a category label that matches no item is a
//! valid filter that simply yields an empty view, never an error.
//!
//! # Available Filters
//!
//! - [`GalleryFilter::All`]: wildcard, matches every item
//! - [`GalleryFilter::Category`]: exact category label match
//! - [`GalleryFilter::Search`]: case-insensitive substring search over
//!   title and description

use super::types::MediaItem;

/// Predicate deciding which items of a gallery are in the visible set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    /// Match every item.
    #[default]
    All,
    /// Match items whose category equals the label exactly.
    ///
    /// Unknown labels are valid and match nothing.
    Category(String),
    /// Match items whose title or description contains the query,
    /// case-insensitively. An empty query matches everything.
    Search(String),
}

impl GalleryFilter {
    /// Creates a category filter, mapping the `"all"` wildcard label to
    /// [`GalleryFilter::All`].
    ///
    /// This is the label-driven constructor used by filter buttons, where
    /// `"all"` is a button value and never an item's own category.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "all" {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    /// Returns `true` if this filter matches the given item.
    ///
    /// This is a pure domain check without I/O.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => item.category == *label,
            Self::Search(query) => {
                if query.is_empty() {
                    return true;
                }
                let query = query.to_lowercase();
                item.title.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
            }
        }
    }

    /// Returns `true` if this filter restricts the visible set
    /// (not `All` and not an empty search query).
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::All => false,
            Self::Category(_) => true,
            Self::Search(query) => !query.is_empty(),
        }
    }
}
