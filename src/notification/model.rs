// ABOUTME: Notification data model shared by producers and the toast surface

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tokio::time::Instant;

use super::NotifyError;

/// Identifier handed back from `enqueue`, unique among active notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.as_u64())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Info,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
            NotificationKind::Info => "ℹ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NotificationKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == wanted)
            .ok_or_else(|| NotifyError::UnknownKind(s.to_string()))
    }
}

/// A single toast. Never edited after creation; a new message means a new notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    /// Zero means the notification stays until dismissed.
    pub duration: Duration,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: String,
        kind: NotificationKind,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            message,
            kind,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// `None` for persistent notifications and for durations past the clock's range.
    pub fn expires_at(&self) -> Option<Instant> {
        if self.is_persistent() {
            None
        } else {
            self.created_at.checked_add(self.duration)
        }
    }

    /// Fraction of the display time left at `now`: 1.0 when fresh, 0.0 once due.
    pub fn remaining_fraction(&self, now: Instant) -> f64 {
        if self.is_persistent() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed >= self.duration {
            0.0
        } else {
            1.0 - (elapsed.as_secs_f64() / self.duration.as_secs_f64())
        }
    }
}
