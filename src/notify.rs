//! User-facing notifications.
//!
//! Every failure path (validation, permission, remote) ends in a notice
//! pushed here; the shell drains the queue after each action and prints.
//! Nothing is logged-only.

use std::sync::Arc;

use parking_lot::Mutex;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Clonable queue of pending notices.
///
/// Cheap to clone and share between the orchestrator and the shell; the
/// producer pushes, the consumer drains in order.
#[derive(Clone, Default)]
pub struct NoticeSink {
    inner: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Error, text);
    }

    fn push(&self, level: NoticeLevel, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(?level, %text, "notice");
        self.inner.lock().push(Notice { level, text });
    }

    /// Take all pending notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.inner.lock().drain(..).collect()
    }
}
