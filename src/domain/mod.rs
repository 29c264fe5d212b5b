// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with minimal external dependencies.
//!
//! This module contains pure value types and business rules. Nothing here
//! performs I/O or talks to a collaborator; that belongs to the
//! `application` and `infrastructure` layers.
//!
//! # Modules
//!
//! - [`access`]: Viewer session and paywall types ([`Session`](access::Session),
//!   [`SubscriptionPlan`](access::SubscriptionPlan), [`Access`](access::Access))
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem),
//!   [`MediaKind`](media::MediaKind), [`GalleryFilter`](media::GalleryFilter))

pub mod access;
pub mod media;
