// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - concrete adapters behind the application ports.
//!
//! - [`sample`]: Deterministic built-in demo catalog
//! - [`manifest`]: TOML manifest-backed catalog
//! - [`demo`]: Identity/payment stubs for the demo binary (the real site
//!   would wrap its provider SDKs here instead)

pub mod demo;
pub mod manifest;
pub mod sample;

pub use demo::{DemoGateway, DemoIdentity};
pub use manifest::ManifestCatalog;
pub use sample::SampleCatalog;
