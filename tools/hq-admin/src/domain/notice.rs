//! Transient operator notices (toasts).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notices kept on the board.
const MAX_NOTICES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Notices with their posting time; each one expires after `ttl`.
#[derive(Debug)]
pub struct NoticeBoard {
    entries: VecDeque<(Notice, Instant)>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_NOTICES),
            ttl,
        }
    }

    pub fn post(&mut self, notice: Notice, now: Instant) {
        self.entries.push_front((notice, now));
        if self.entries.len() > MAX_NOTICES {
            self.entries.pop_back();
        }
    }

    /// Newest notice that has not expired.
    pub fn current(&self, now: Instant) -> Option<&Notice> {
        self.entries
            .iter()
            .find(|(_, posted)| now.saturating_duration_since(*posted) < self.ttl)
            .map(|(notice, _)| notice)
    }

    /// Drop expired notices.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|(_, posted)| now.saturating_duration_since(*posted) < ttl);
    }

    /// All notices, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|(notice, _)| notice)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
