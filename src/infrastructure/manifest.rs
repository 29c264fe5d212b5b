// SPDX-License-Identifier: MPL-2.0
//! TOML manifest-backed catalog.
//!
//! A profile's content can be described in a `profile.toml` manifest with
//! `[[photos]]` and `[[videos]]` tables. The manifest is read once at
//! construction; the catalog then serves the decoded collections from
//! memory, matching the bulk-load contract of [`CatalogSource`].

use crate::application::port::{CatalogError, CatalogSource};
use crate::domain::media::MediaItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk manifest layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Photo entries in display order.
    #[serde(default)]
    pub photos: Vec<MediaItem>,
    /// Video entries in display order.
    #[serde(default)]
    pub videos: Vec<MediaItem>,
}

/// Catalog adapter serving collections decoded from a TOML manifest.
#[derive(Debug, Clone)]
pub struct ManifestCatalog {
    manifest: Manifest,
}

impl ManifestCatalog {
    /// Reads and decodes a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Malformed`] if it is not a valid manifest.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let manifest =
            toml::from_str(&content).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(Self { manifest })
    }

    /// Wraps an already-decoded manifest.
    #[must_use]
    pub fn from_manifest(manifest: Manifest) -> Self {
        Self { manifest }
    }
}

impl CatalogSource for ManifestCatalog {
    fn photos(&self) -> Result<Vec<MediaItem>, CatalogError> {
        Ok(self.manifest.photos.clone())
    }

    fn videos(&self) -> Result<Vec<MediaItem>, CatalogError> {
        Ok(self.manifest.videos.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
        [[photos]]
        id = "photo_1"
        kind = "photo"
        title = "Opening shot"
        description = "First photo of the set"
        url = "https://example.com/photo_1.jpg"
        category = "professional"
        is_premium = true
        timestamp = "2024-06-01T12:00:00Z"

        [[videos]]
        id = "video_1"
        kind = "video"
        title = "Backstage"
        url = "https://example.com/video_1.mp4"
        duration = "2:34"
        category = "short"
        timestamp = "2024-05-30T09:00:00Z"
    "#;

    #[test]
    fn load_decodes_photos_and_videos() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("profile.toml");
        fs::write(&path, MANIFEST).expect("failed to write manifest");

        let catalog = ManifestCatalog::load(&path).expect("manifest should load");
        let photos = catalog.photos().expect("photos");
        let videos = catalog.videos().expect("videos");

        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, "photo_1");
        assert!(photos[0].is_premium);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].duration.as_deref(), Some("2:34"));
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope.toml");

        match ManifestCatalog::load(&missing) {
            Err(CatalogError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_maps_to_malformed_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("profile.toml");
        fs::write(&path, "photos = 12").expect("failed to write manifest");

        match ManifestCatalog::load(&path) {
            Err(CatalogError::Malformed(_)) => {}
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn empty_manifest_yields_empty_collections() {
        let catalog = ManifestCatalog::from_manifest(Manifest::default());
        assert!(catalog.photos().expect("photos").is_empty());
        assert!(catalog.videos().expect("videos").is_empty());
    }
}
