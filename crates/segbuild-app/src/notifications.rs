//! Toast notifications
//!
//! Fire-and-forget messages shown over the UI and dismissed automatically
//! once their display duration has elapsed.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Local};

use crate::config::NotificationSettings;

/// Shown after the endpoint accepted a segment
pub const SAVE_SUCCESS_MESSAGE: &str = "Segment saved successfully!";

/// Shown when the segment could not be delivered
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to save the segment. Please try again.";

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: DateTime<Local>,
}

/// Anything that can display a notification
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>);

    fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }
}

/// Active toasts, oldest first
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    duration: Duration,
    max_visible: usize,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(&NotificationSettings::default())
    }
}

impl NotificationQueue {
    pub fn new(settings: &NotificationSettings) -> Self {
        Self {
            items: VecDeque::new(),
            duration: display_duration(settings.duration_ms),
            max_visible: settings.max_visible.max(1),
        }
    }

    /// Add a toast raised at `now`, dropping the oldest beyond capacity
    pub fn push_at(&mut self, kind: NotificationKind, message: String, now: DateTime<Local>) {
        self.items.push_back(Notification {
            kind,
            message,
            raised_at: now,
        });
        while self.items.len() > self.max_visible {
            self.items.pop_front();
        }
    }

    /// Drop toasts older than the display duration; returns how many went
    pub fn expire(&mut self, now: DateTime<Local>) -> usize {
        let before = self.items.len();
        let duration = self.duration;
        self.items.retain(|n| now - n.raised_at < duration);
        before - self.items.len()
    }

    /// Oldest first; `.rev()` gives newest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> + '_ {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Out-of-range durations saturate instead of wrapping
fn display_duration(ms: u64) -> Duration {
    i64::try_from(ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .unwrap_or(Duration::MAX)
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("notify {:?}: {}", kind, message);
        self.push_at(kind, message, Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(duration_ms: u64, max_visible: usize) -> NotificationQueue {
        NotificationQueue::new(&NotificationSettings {
            duration_ms,
            max_visible,
            ..Default::default()
        })
    }

    #[test]
    fn test_notify_records_kind_and_message() {
        let mut q = NotificationQueue::default();
        q.success(SAVE_SUCCESS_MESSAGE);
        q.error("boom");

        let kinds: Vec<_> = q.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Error]);
        assert_eq!(q.latest().unwrap().message, "boom");
    }

    #[test]
    fn test_expire_after_duration() {
        let mut q = queue(3000, 3);
        let t0 = Local::now();
        q.push_at(NotificationKind::Success, "saved".into(), t0);

        assert_eq!(q.expire(t0 + Duration::milliseconds(2999)), 0);
        assert_eq!(q.len(), 1);

        assert_eq!(q.expire(t0 + Duration::milliseconds(3000)), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut q = queue(3000, 2);
        let now = Local::now();
        q.push_at(NotificationKind::Error, "one".into(), now);
        q.push_at(NotificationKind::Error, "two".into(), now);
        q.push_at(NotificationKind::Error, "three".into(), now);

        let messages: Vec<_> = q.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_huge_duration_saturates() {
        let mut q = queue(u64::MAX, 3);
        let t0 = Local::now();
        q.push_at(NotificationKind::Success, "forever".into(), t0);

        assert_eq!(q.expire(t0 + Duration::days(365 * 100)), 0);
        assert_eq!(q.len(), 1);
        assert_eq!(display_duration(u64::MAX), Duration::MAX);
        assert_eq!(display_duration(1500), Duration::milliseconds(1500));
    }

    #[test]
    fn test_iter_reverses_to_newest_first() {
        let mut q = queue(3000, 3);
        q.success("older");
        q.error("newer");
        let newest: Vec<_> = q.iter().rev().map(|n| n.message.as_str()).collect();
        assert_eq!(newest, vec!["newer", "older"]);
    }

    #[test]
    fn test_zero_capacity_still_shows_one() {
        let mut q = queue(3000, 0);
        q.success("kept");
        assert_eq!(q.len(), 1);
    }
}
