//! Cross-view ambient state: the busy flag and the notification slot.
//!
//! The shell is owned by the root [`App`](crate::views::App) and handed to
//! views explicitly. Front ends observe it through `watch` receivers.

mod busy;
mod notification;

use std::time::Duration;

use tokio::sync::watch;

pub use busy::{BusyGuard, BusyTracker};
pub use notification::{Notification, NotificationSlot};

use crate::config::UiConfig;

#[derive(Clone, Debug)]
pub struct Shell {
    busy: BusyTracker,
    notifications: NotificationSlot,
}

impl Shell {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            busy: BusyTracker::new(),
            notifications: NotificationSlot::new(notification_ttl),
        }
    }

    pub fn from_config(ui: &UiConfig) -> Self {
        Self::new(ui.notification_duration())
    }

    pub fn busy(&self) -> &BusyTracker {
        &self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn notifications(&self) -> &NotificationSlot {
        &self.notifications
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notifications.success(message);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notifications.error(message);
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    pub fn subscribe_notifications(&self) -> watch::Receiver<Option<Notification>> {
        self.notifications.subscribe()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}
