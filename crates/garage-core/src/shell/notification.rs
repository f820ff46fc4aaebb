use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub is_error: bool,
    /// Monotonic id; used so an old auto-dismiss never clears a newer message.
    pub generation: u64,
}

impl Notification {
    /// Banner text shown for this notification's severity.
    pub fn headline(&self) -> &'static str {
        if self.is_error {
            "Wystąpił błąd"
        } else {
            "Poprawnie zapisano zmiany"
        }
    }
}

/// Single-slot notification holder with auto-dismiss.
///
/// A new notification replaces the current one (no queueing). Every
/// notification schedules its own dismissal after the configured interval;
/// the dismissal only clears the slot if that same notification is still
/// shown.
#[derive(Clone, Debug)]
pub struct NotificationSlot {
    inner: Arc<SlotInner>,
}

#[derive(Debug)]
struct SlotInner {
    tx: watch::Sender<Option<Notification>>,
    generation: AtomicU64,
    ttl: Duration,
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            inner: Arc::new(SlotInner {
                tx,
                generation: AtomicU64::new(0),
                ttl,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, false)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, true)
    }

    /// Replace the current notification and schedule its dismissal.
    ///
    /// Outside a tokio runtime the notification is shown but never
    /// auto-dismissed; call [`dismiss`](Self::dismiss) instead.
    pub fn show(&self, message: impl Into<String>, is_error: bool) -> u64 {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let notification = Notification {
            message: message.into(),
            is_error,
            generation,
        };

        debug!(
            event = "core.shell.notification_shown",
            generation = generation,
            is_error = is_error,
            message = %notification.message
        );
        self.inner.tx.send_replace(Some(notification));

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let weak: Weak<SlotInner> = Arc::downgrade(&self.inner);
                let ttl = self.inner.ttl;
                handle.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    if let Some(inner) = weak.upgrade() {
                        NotificationSlot { inner }.dismiss_generation(generation);
                    }
                });
            }
            Err(_) => debug!(
                event = "core.shell.notification_timer_skipped",
                generation = generation,
                "No runtime available, notification will not auto-dismiss"
            ),
        }

        generation
    }

    /// Clear the slot if it still holds the notification with `generation`.
    ///
    /// Returns true if the slot was cleared.
    pub fn dismiss_generation(&self, generation: u64) -> bool {
        let cleared = self.inner.tx.send_if_modified(|current| {
            if current
                .as_ref()
                .is_some_and(|n| n.generation == generation)
            {
                *current = None;
                true
            } else {
                false
            }
        });
        if cleared {
            debug!(
                event = "core.shell.notification_dismissed",
                generation = generation
            );
        }
        cleared
    }

    /// Clear whatever notification is shown.
    pub fn dismiss(&self) {
        self.inner.tx.send_if_modified(|current| current.take().is_some());
    }

    pub fn current(&self) -> Option<Notification> {
        self.inner.tx.borrow().clone()
    }

    /// Receive notification changes (shown, replaced, dismissed).
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.inner.tx.subscribe()
    }
}
