//! Notification contract between the waitlist form and whatever displays toasts.
//!
//! The form never renders messages itself. It produces a [`Notice`] and hands it to a
//! [`Notifier`]; the landing page implements `Notifier` with its toast stack.

use serde::Serialize;

/// Severity of a notice. Drives the toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Positive confirmation
    Success,
    /// Something the user has to act on
    Error,
}

impl NoticeLevel {
    /// Lowercase label, used as a CSS modifier (`toast-success`, `toast-error`).
    pub fn as_label(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

/// A transient, auto-dismissing message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

impl Notice {
    /// Build a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Build an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// True for [`NoticeLevel::Success`].
    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

/// Fire-and-forget sink for notices.
pub trait Notifier {
    /// Display `notice`. Nothing is returned to the caller.
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
