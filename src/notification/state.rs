use std::time::{Duration, Instant};

use crate::config::DEFAULT_NOTIFICATION_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_NOTIFICATION_SECS))
    }
}

impl NotificationState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: &str) {
        self.push(message, NotificationKind::Info);
    }

    pub fn show_error(&mut self, message: &str) {
        self.push(message, NotificationKind::Error);
    }

    fn push(&mut self, message: &str, kind: NotificationKind) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// The live notification, if it has not expired yet
    pub fn current(&self) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| n.shown_at.elapsed() < self.duration)
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current().map(|n| n.message.as_str())
    }

    /// Drop the notification once it has expired
    pub fn clear_if_expired(&mut self) {
        if self.current.is_some() && self.current().is_none() {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
