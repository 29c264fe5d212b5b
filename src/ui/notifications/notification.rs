// SPDX-License-Identifier: MPL-2.0
//! Toast data types.
//!
//! A [`Notification`] carries an i18n message key plus interpolation
//! arguments, never a preformatted string; the renderer resolves the text
//! in the viewer's locale when the toast is drawn.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity of a toast, deciding its badge and how long it stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// An operation completed (sign-in, purchase, sign-out).
    #[default]
    Success,
    /// Neutral information.
    Info,
    /// Something went wrong but the viewer need not act (cancelled flows).
    Warning,
    /// A failure the viewer should read; stays until dismissed.
    Error,
}

impl Severity {
    /// Badge symbol shown next to the message.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }

    /// How long a toast of this severity stays visible, `None` for
    /// manual dismissal.
    #[must_use]
    pub fn display_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// One toast: a severity, an i18n message key, and its arguments.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    /// When the toast expires. `None` means it stays until dismissed.
    expires_at: Option<Instant>,
}

impl Notification {
    fn with_severity(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            expires_at: severity.display_duration().map(|d| Instant::now() + d),
        }
    }

    /// Creates a success toast.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Success, message_key)
    }

    /// Creates an info toast.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, message_key)
    }

    /// Creates a warning toast.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, message_key)
    }

    /// Creates an error toast. Errors stay until dismissed.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, message_key)
    }

    /// Attaches one interpolation argument for the i18n layer.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The i18n key to resolve at render time.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Interpolation arguments, in insertion order.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns `true` once the toast's display time has elapsed.
    /// Always `false` for manual-dismiss severities.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}
