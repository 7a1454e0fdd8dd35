use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Transient confirmation (e.g. "saved").
    Tray,
    /// User-visible failure that needs attention.
    Error,
}

/// A message the renderer should show once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    pub fn tray(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Tray,
            message: message.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            issued_at: Utc::now(),
        }
    }
}
