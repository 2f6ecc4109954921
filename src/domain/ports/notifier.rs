//! Notifier Port
//!
//! Transient messages for the user (toasts in a UI, log lines in the CLI).
//! Deletions carry an undo action the front end can offer.

use crate::domain::value_objects::IdentityKey;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Danger,
}

/// Undo offered alongside a removal message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoAction {
    /// Button text
    pub label: String,
    /// Key of the removed record
    pub key: IdentityKey,
    /// Collection the record was removed from (`techniques`, `detection`, ...)
    pub collection: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub action: Option<UndoAction>,
}

impl Notification {
    fn new(level: NotificationLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, message)
    }

    pub fn danger(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Danger, title, message)
    }

    pub fn with_action(mut self, action: UndoAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Trait for delivering notifications to the user
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {
        // Do nothing
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
