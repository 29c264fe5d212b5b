// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! These services provide read-only access plus the minimal state
//! transitions (filter, load-more) needed to answer "what is shown now".
//!
//! # Available Services
//!
//! - [`gallery`]: Filtered/paged gallery view-model (`GalleryView`)

pub mod gallery;

// Re-export main types
pub use gallery::{GalleryInfo, GalleryView};
