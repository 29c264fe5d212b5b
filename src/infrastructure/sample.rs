// SPDX-License-Identifier: MPL-2.0
//! Built-in sample catalog.
//!
//! Generates the demo content set: 24 photos and 16 videos with categories,
//! premium flags, and durations cycling the way the production content
//! source lays them out. Timestamps count back one day per item from a
//! fixed epoch so the data is fully deterministic.

use crate::application::port::{CatalogError, CatalogSource};
use crate::domain::media::{MediaItem, MediaKind};
use chrono::{DateTime, Duration, Utc};

/// Number of sample photos.
const PHOTO_COUNT: usize = 24;

/// Number of sample videos.
const VIDEO_COUNT: usize = 16;

/// 2024-06-01 12:00:00 UTC, the newest item's timestamp.
const EPOCH_SECS: i64 = 1_717_243_200;

/// Deterministic in-memory catalog used by the demo binary and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    /// Creates the sample catalog.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(EPOCH_SECS, 0).unwrap_or_default()
    }
}

impl CatalogSource for SampleCatalog {
    fn photos(&self) -> Result<Vec<MediaItem>, CatalogError> {
        let epoch = Self::epoch();
        Ok((0..PHOTO_COUNT)
            .map(|i| {
                let n = i + 1;
                MediaItem {
                    id: format!("photo_{n}"),
                    kind: MediaKind::Photo,
                    title: format!("Photo session {n}"),
                    description: format!("Professional photo shoot #{n}"),
                    url: format!("https://picsum.photos/seed/profile{n}/400/400"),
                    thumbnail_url: None,
                    duration: None,
                    category: ["professional", "casual", "exclusive"][i % 3].to_string(),
                    is_premium: i % 4 == 0,
                    timestamp: epoch - Duration::days(i as i64),
                }
            })
            .collect())
    }

    fn videos(&self) -> Result<Vec<MediaItem>, CatalogError> {
        let epoch = Self::epoch();
        Ok((0..VIDEO_COUNT)
            .map(|i| {
                let n = i + 1;
                MediaItem {
                    id: format!("video_{n}"),
                    kind: MediaKind::Video,
                    title: format!("Exclusive video {n}"),
                    description: format!("Premium video content #{n}"),
                    url: format!("https://cdn.example.com/videos/video_{n}.mp4"),
                    thumbnail_url: Some(format!("https://picsum.photos/seed/video{n}/640/360")),
                    duration: Some(["2:34", "5:12", "8:45", "12:20"][i % 4].to_string()),
                    category: ["short", "long", "premium"][i % 3].to_string(),
                    is_premium: i % 3 == 0,
                    timestamp: epoch - Duration::days(i as i64),
                }
            })
            .collect())
    }
}
