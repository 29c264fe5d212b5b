// SPDX-License-Identifier: MPL-2.0
//! Content catalog port definition.
//!
//! The [`CatalogSource`] trait is the inbound loader boundary: it produces
//! the full, unfiltered item collections that the gallery view-models are
//! loaded with, once per session or per reload. Where the items come from
//! (a storage bucket listing, a manifest file, generated sample data) is an
//! adapter concern.

use crate::domain::media::MediaItem;
use std::fmt;

/// Errors that can occur while loading a content catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The backing source could not be reached.
    Unavailable(String),

    /// The source responded but its content could not be decoded.
    Malformed(String),

    /// Local I/O failed (manifest file reads).
    Io(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unavailable(msg) => write!(f, "Catalog unavailable: {msg}"),
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog: {msg}"),
            CatalogError::Io(msg) => write!(f, "Catalog I/O error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Port for loading the profile's content collections.
///
/// Both methods return the full collection in the source's order; the
/// gallery view-model takes that order as load order.
pub trait CatalogSource {
    /// Loads the full photo collection.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the source cannot be reached or its
    /// content cannot be decoded.
    fn photos(&self) -> Result<Vec<MediaItem>, CatalogError>;

    /// Loads the full video collection.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the source cannot be reached or its
    /// content cannot be decoded.
    fn videos(&self) -> Result<Vec<MediaItem>, CatalogError>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn photos(&self) -> Result<Vec<MediaItem>, CatalogError> {
        (**self).photos()
    }

    fn videos(&self) -> Result<Vec<MediaItem>, CatalogError> {
        (**self).videos()
    }
}
