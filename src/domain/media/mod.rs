// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the core media types that are independent of any
//! presentation or infrastructure concerns.

pub mod filter;
pub mod types;

// Re-export commonly used types
pub use filter::GalleryFilter;
pub use types::{MediaItem, MediaKind};
