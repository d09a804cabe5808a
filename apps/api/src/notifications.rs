//! Ephemeral user notifications. Held in memory only; each one expires after a
//! fixed lifetime and is pruned on the next push or read.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

/// How long a notification stays visible.
pub const DEFAULT_LIFETIME_MS: i64 = 3000;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct NotificationCenter {
    items: Mutex<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) -> Notification {
        self.push(message, NotificationKind::Success, Utc::now())
    }

    pub fn error(&self, message: impl Into<String>) -> Notification {
        self.push(message, NotificationKind::Error, Utc::now())
    }

    pub fn push(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            expires_at: now + Duration::milliseconds(DEFAULT_LIFETIME_MS),
        };
        let mut items = self.lock();
        items.retain(|n| n.expires_at > now);
        items.push(notification.clone());
        notification
    }

    /// Removes a notification before it expires. Returns whether it existed.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|n| n.id != id);
        items.len() != before
    }

    /// Notifications still visible at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notification> {
        let mut items = self.lock();
        items.retain(|n| n.expires_at > now);
        items.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
