//! Notification data model.

use serde::{Deserialize, Serialize};

/// Default display duration when the host omits one.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

// ===== NotificationKind =====

/// Severity of a notification, controlling glyph and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

impl NotificationKind {
    /// Status glyph shown next to the notification text.
    pub fn glyph(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

// ===== NotificationData =====

/// A notification as sent by the host.
///
/// The unique id is not part of the payload; the queue assigns one per
/// enqueue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Bold headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity; defaults to info when absent.
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    /// Display duration in milliseconds before timed removal.
    #[serde(rename = "duration", default = "default_duration")]
    pub duration_ms: u64,
}

fn default_duration() -> u64 {
    DEFAULT_NOTIFICATION_DURATION_MS
}
