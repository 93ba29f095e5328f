//! Toast notices shown on top of the page.

use crate::inquiry::{Notice, Notifier};
use chrono::{DateTime, Duration, Utc};
use log::*;

/// A notice together with the moment it was raised.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub notice: Notice,
    pub raised_at: DateTime<Utc>,
}

/// Queue of toasts that expire after a fixed time to live.
///
#[derive(Debug)]
pub struct NoticeBoard {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        NoticeBoard::new(Duration::seconds(4))
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        NoticeBoard { toasts: vec![], ttl }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn push_at(&mut self, notice: Notice, now: DateTime<Utc>) {
        self.toasts.push(Toast {
            notice,
            raised_at: now,
        });
    }

    /// Drop every toast older than the time to live.
    ///
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| now - toast.raised_at < ttl);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, notice: Notice) {
        debug!("Raising notice '{}'.", notice.title);
        self.push_at(notice, Utc::now());
    }
}
