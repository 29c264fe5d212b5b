// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Manager`] caps how many toasts are on screen, parks the overflow
//! in a queue, and retires expired toasts on [`Manager::tick`]. Drawing is
//! the renderer's job; the manager only decides what is showing.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Cap on simultaneously visible toasts; the rest wait in the queue.
const MAX_VISIBLE: usize = 3;

/// Tracks which toasts are on screen and which are waiting.
#[derive(Debug, Default)]
pub struct Manager {
    /// On-screen toasts, newest first.
    visible: VecDeque<Notification>,
    /// Overflow, oldest first; promoted as screen slots free up.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, or queues it when the screen is full.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes the toast with this id, wherever it is.
    ///
    /// Returns `true` if it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.visible.len() + self.queue.len();
        self.visible.retain(|n| n.id() != id);
        self.queue.retain(|n| n.id() != id);
        let removed = self.visible.len() + self.queue.len() < before;
        if removed {
            self.promote_from_queue();
        }
        removed
    }

    /// Retires expired toasts and promotes queued ones into the freed slots.
    ///
    /// Call periodically from the surrounding event loop (a few times per
    /// second is plenty).
    pub fn tick(&mut self) {
        self.visible.retain(|n| !n.is_expired());
        self.promote_from_queue();
    }

    /// On-screen toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Drops every toast, on screen or queued.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Drops content-load error toasts, wherever they are.
    ///
    /// A new load attempt calls this first so the screen never mixes stale
    /// load errors with the outcome of the current attempt.
    pub fn clear_load_errors(&mut self) {
        self.visible
            .retain(|n| !n.message_key().starts_with("notification-load-error"));
        self.queue
            .retain(|n| !n.message_key().starts_with("notification-load-error"));
        self.promote_from_queue();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}
