// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is the headless core of a subscription-based media profile
//! page: gallery filtering and pagination, an age gate, a viewer session
//! with a display-side paywall, and toast notifications - with the content
//! source, identity provider, and payment widget behind ports.
//!
//! It deliberately contains no rendering: a front end maps the view-model
//! output ([`application::query::GalleryView`], [`ui::render::MediaCard`])
//! onto its own widgets.

#![doc(html_root_url = "https://docs.rs/vitrine/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
