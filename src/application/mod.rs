// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for the external collaborators
//!   (content catalog, identity provider, payment gateway)
//! - [`query`]: Read-side services ([`GalleryView`](query::GalleryView))
//! - [`session`]: The profile session service driving the collaborators
//!
//! # Dependency Rule
//!
//! The application layer depends on domain types only. Infrastructure
//! adapters implement the port traits; the presentation layer consumes the
//! query services and the session service's outputs.

pub mod port;
pub mod query;
pub mod session;
