//! Transient user-facing notices.

/// Severity of a notice, used only for styling.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A short message with a title and a detail line.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub detail: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: &str, detail: &str) -> Self {
        Notice {
            kind,
            title: title.to_owned(),
            detail: detail.to_owned(),
        }
    }

    pub fn review_needed() -> Self {
        Notice::new(
            NoticeKind::Info,
            "Please review the form",
            "Some fields need your attention.",
        )
    }

    pub fn sent() -> Self {
        Notice::new(
            NoticeKind::Success,
            "Message sent",
            "We’ll get back to you within 1–2 business days.",
        )
    }

    pub fn failed() -> Self {
        Notice::new(
            NoticeKind::Error,
            "Something went wrong",
            "Please try again later.",
        )
    }
}

/// Capability to display a notice to the user.
///
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
