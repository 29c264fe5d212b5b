// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Collaborator failures (content load, sign-in, payment) and successes are
//! surfaced as short-lived, non-blocking notifications. This module keeps
//! the queue and lifecycle; actually drawing a toast is the renderer's job.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//!
//! # Design Considerations
//!
//! - Auto-dismiss: ~3s for success/info, ~5s for warnings, manual for errors
//! - Max visible toasts: 3 (others are queued)
//! - Messages are i18n keys with optional interpolation arguments, resolved
//!   at render time

mod manager;
mod notification;

pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};
