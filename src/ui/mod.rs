// SPDX-License-Identifier: MPL-2.0
//! Presentation-side helpers, kept headless.
//!
//! Nothing in here touches a widget toolkit or a document tree: the
//! renderer adapters turn view-model output into plain display rows, and
//! the notification system manages toast lifecycles. A real front end maps
//! these onto its own widgets.

pub mod notifications;
pub mod render;
