//! Transient, dismissible user notices.

use std::time::{Duration, Instant};

use crate::error::WorkflowError;

/// Default lifetime of a notice.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holds the notices currently on screen, newest last.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    notices: Vec<Notice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            notices: Vec::new(),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: NoticeLevel, message: impl Into<String>, now: Instant) {
        self.notices.push(Notice {
            level,
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    /// Show a workflow error: its user-facing message plus the category's
    /// recovery hint. A conflict only asks the user to wait, so it is info.
    pub fn push_error(&mut self, error: &WorkflowError) {
        let category = error.category();
        tracing::info!(code = error.error_code(), category = %category, "{}", error);

        let level = if category.is_transient() {
            NoticeLevel::Info
        } else {
            NoticeLevel::Error
        };
        let message = match category.recovery_hint() {
            Some(hint) => format!("{} {}", error.user_message(), hint),
            None => error.user_message(),
        };
        self.push(level, message);
    }

    /// Notices not yet expired at `now`.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| !n.is_expired(now))
    }

    /// The most recent live notice.
    pub fn latest(&self, now: Instant) -> Option<&Notice> {
        self.active(now).last()
    }

    /// Dismiss the most recent notice.
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.notices.pop()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    /// Drop expired notices.
    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
