//! Notifier Implementations
//!
//! - TracingNotifier: routes notifications to `tracing` events

use tracing::{info, warn};

use crate::domain::ports::{Notification, NotificationLevel, Notifier};

/// Logs notifications; danger and warning map to `warn`, info to `info`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let undo = notification.action.as_ref().map(|a| a.key.to_string());
        match notification.level {
            NotificationLevel::Info => info!(
                title = %notification.title,
                undo = ?undo,
                "{}",
                notification.message
            ),
            NotificationLevel::Warning => warn!(
                title = %notification.title,
                "{}",
                notification.message
            ),
            NotificationLevel::Danger => warn!(
                title = %notification.title,
                danger = true,
                "{}",
                notification.message
            ),
        }
    }
}
