//! Signals from controllers to the presentation layer.
//!
//! Controllers never touch input elements, dialogs, or toasts. They queue
//! [`UiSignal`] values and the page layer drains them with
//! `take_signals()` after each operation.

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// An instruction for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiSignal {
    /// Move input focus to the first-name field.
    FocusFirstName,
    /// Leave the current page for the survey list.
    NavigateToList,
    /// Open the read-only view of a survey.
    NavigateToView(i64),
    /// Open the edit form for a survey.
    NavigateToEdit(i64),
    /// Show a message to the user.
    Notice { level: NoticeLevel, text: String },
}

impl UiSignal {
    pub fn success(text: impl Into<String>) -> Self {
        UiSignal::Notice {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        UiSignal::Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Ordered signal queue owned by each controller
#[derive(Debug, Default)]
pub(crate) struct SignalQueue {
    pending: Vec<UiSignal>,
}

impl SignalQueue {
    pub fn push(&mut self, signal: UiSignal) {
        self.pending.push(signal);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(UiSignal::success(text));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(UiSignal::error(text));
    }

    /// Hand the queued signals to the caller, leaving the queue empty.
    pub fn take(&mut self) -> Vec<UiSignal> {
        std::mem::take(&mut self.pending)
    }
}
