//! Shutdown coordination for timers.

use tokio::sync::watch;

/// Coordinator for cooperative shutdown.
///
/// Owned by the supervisor. Every timer receives a [`CancelSignal`] from
/// [`Shutdown::subscribe`]; a single [`Shutdown::trigger`] stops them all.
/// Dropping the coordinator counts as a trigger.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Hand out a read-only view of the shutdown state.
    pub fn subscribe(&self) -> CancelSignal {
        CancelSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal. Later calls are no-ops.
    pub fn trigger(&self) {
        let already = self.tx.send_replace(true);
        if !already {
            tracing::info!(
                subscribers = self.tx.receiver_count(),
                "Shutdown triggered"
            );
        }
    }

    /// Whether shutdown has been triggered.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Get the number of outstanding cancel signals.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only cancellation handle given to a timer.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Non-blocking check. True once triggered or once the coordinator is gone.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Wait until cancellation is requested.
    ///
    /// Returns immediately if it already was.
    pub async fn cancelled(&mut self) {
        // Err means the coordinator was dropped, which also cancels.
        let _ = self.rx.wait_for(|cancelled| *cancelled).await.map(|_| ());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn trigger_is_sticky() {
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();
        assert!(!shutdown.is_triggered());
        assert!(!signal.is_cancelled());

        shutdown.trigger();
        shutdown.trigger();
        assert!(shutdown.is_triggered());
        assert!(signal.is_cancelled());

        // Subscribing after the fact still sees the trigger.
        assert!(shutdown.subscribe().is_cancelled());
    }

    #[test]
    fn receiver_count_tracks_signals() {
        let shutdown = Shutdown::new();
        assert_eq!(shutdown.receiver_count(), 0);

        let a = shutdown.subscribe();
        let b = a.clone();
        assert_eq!(shutdown.receiver_count(), 2);

        drop(a);
        drop(b);
        assert_eq!(shutdown.receiver_count(), 0);
    }

    #[tokio::test]
    async fn dropping_coordinator_cancels() {
        let shutdown = Shutdown::new();
        let mut signal = shutdown.subscribe();
        drop(shutdown);

        assert!(signal.is_cancelled());
        tokio::time::timeout(Duration::from_millis(100), signal.cancelled())
            .await
            .expect("cancelled() should resolve once the coordinator is gone");
    }

    #[tokio::test]
    async fn cancelled_wakes_waiter() {
        let shutdown = Shutdown::new();
        let mut signal = shutdown.subscribe();

        let waiter = tokio::spawn(async move {
            signal.cancelled().await;
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        shutdown.trigger();
        tokio::time::timeout(Duration::from_millis(100), waiter)
            .await
            .expect("waiter should finish after trigger")
            .unwrap();
    }
}
