use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::watch;

/// Counts outstanding backend calls and publishes whether any are in flight.
///
/// Each call holds a [`BusyGuard`] for its duration; the flag stays set
/// until the last outstanding guard is dropped, so overlapping calls never
/// clear it early.
#[derive(Clone, Debug)]
pub struct BusyTracker {
    inner: Arc<BusyInner>,
}

#[derive(Debug)]
struct BusyInner {
    outstanding: AtomicUsize,
    tx: watch::Sender<bool>,
}

impl BusyTracker {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            inner: Arc::new(BusyInner {
                outstanding: AtomicUsize::new(0),
                tx,
            }),
        }
    }

    /// Mark one call as outstanding until the returned guard is dropped.
    pub fn begin(&self) -> BusyGuard {
        self.inner.outstanding.fetch_add(1, Ordering::SeqCst);
        self.publish();
        BusyGuard {
            tracker: self.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.outstanding() > 0
    }

    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }

    /// Receive busy-flag transitions.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.tx.subscribe()
    }

    // The count is read under the channel's write lock so concurrent
    // begin/end pairs always publish the final state last.
    fn publish(&self) {
        self.inner.tx.send_if_modified(|busy| {
            let now = self.inner.outstanding.load(Ordering::SeqCst) > 0;
            if *busy == now {
                false
            } else {
                *busy = now;
                true
            }
        });
    }
}

impl Default for BusyTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the busy flag raised while alive.
#[derive(Debug)]
#[must_use = "the call is only tracked while the guard is alive"]
pub struct BusyGuard {
    tracker: BusyTracker,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.tracker
            .inner
            .outstanding
            .fetch_sub(1, Ordering::SeqCst);
        self.tracker.publish();
    }
}
