// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! A [`MediaItem`] is one entry of a gallery: a photo or a video plus its
//! descriptive payload. The gallery view-model only ever inspects `category`
//! (for filtering) and `title`/`description` (for text search); everything
//! else is carried through unchanged for the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the two kinds of gallery content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still photo.
    Photo,
    /// A video clip (carries a duration label).
    Video,
}

/// A single gallery entry.
///
/// `id` is an opaque unique identifier, stable for the item's lifetime.
/// `category` is a free-form label; each gallery uses a small closed set
/// (photos: professional/casual/exclusive, videos: short/long/premium) but
/// nothing in this type enforces that.
///
/// `is_premium` is display-only: the paywall layer decides what to do with
/// it, the gallery core just passes it through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Opaque unique identifier.
    pub id: String,
    /// Photo or video.
    pub kind: MediaKind,
    /// Display title.
    pub title: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// URL of the full-size media.
    pub url: String,
    /// URL of a preview thumbnail, if distinct from `url`.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Preformatted duration label for videos (e.g. "5:12").
    #[serde(default)]
    pub duration: Option<String>,
    /// Category label used by the gallery filter.
    pub category: String,
    /// Whether this item sits behind the paywall.
    #[serde(default)]
    pub is_premium: bool,
    /// Publication timestamp.
    pub timestamp: DateTime<Utc>,
}

impl MediaItem {
    /// Returns `true` if this item is a video.
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video)
    }
}
