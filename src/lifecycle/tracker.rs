//! Completion tracking for running timers.
//!
//! # Responsibilities
//! - Count timers that have started but not yet finished
//! - Let the supervisor wait until every timer has exited
//! - Bound that wait with a grace period

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

/// Errors raised while coordinating shutdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Timers were still running when the grace period ran out.
    #[error("shutdown grace period {grace:?} exceeded; {outstanding} timer(s) still running")]
    GraceExceeded { grace: Duration, outstanding: usize },
}

/// Shared count of timers that have not finished shutting down.
///
/// Cheap to clone; all clones observe the same count. The count lives in a
/// watch channel so waiters wake as soon as it reaches zero.
#[derive(Debug, Clone)]
pub struct CompletionTracker {
    outstanding: Arc<watch::Sender<usize>>,
}

impl CompletionTracker {
    /// Create a tracker with nothing outstanding.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self {
            outstanding: Arc::new(tx),
        }
    }

    /// Record one more running task. Returns a guard that deregisters on drop.
    pub fn register(&self, name: &str) -> CompletionGuard {
        self.outstanding.send_modify(|count| *count += 1);
        tracing::trace!(name = %name, outstanding = self.outstanding(), "Task registered");
        CompletionGuard {
            outstanding: Arc::clone(&self.outstanding),
            name: name.to_string(),
        }
    }

    /// Number of registered tasks that have not completed.
    pub fn outstanding(&self) -> usize {
        *self.outstanding.borrow()
    }

    /// Wait until every registered task has completed.
    pub async fn wait(&self) {
        let mut rx = self.outstanding.subscribe();
        // The sender lives in `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|count| *count == 0).await.map(|_| ());
    }

    /// Like [`wait`](Self::wait), but give up after `grace`.
    pub async fn wait_timeout(&self, grace: Duration) -> Result<(), LifecycleError> {
        match tokio::time::timeout(grace, self.wait()).await {
            Ok(()) => Ok(()),
            Err(_) => {
                let outstanding = self.outstanding();
                tracing::warn!(
                    grace_ms = grace.as_millis() as u64,
                    outstanding,
                    "Tasks still running after grace period"
                );
                Err(LifecycleError::GraceExceeded { grace, outstanding })
            }
        }
    }
}

impl Default for CompletionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration held by a running task.
/// Decrements the outstanding count when dropped.
#[derive(Debug)]
pub struct CompletionGuard {
    outstanding: Arc<watch::Sender<usize>>,
    name: String,
}

impl CompletionGuard {
    /// Name the task registered under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.outstanding
            .send_modify(|count| *count = count.saturating_sub(1));
        tracing::trace!(name = %self.name, "Task completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_counts() {
        let tracker = CompletionTracker::new();
        assert_eq!(tracker.outstanding(), 0);

        let guard1 = tracker.register("a");
        assert_eq!(tracker.outstanding(), 1);
        assert_eq!(guard1.name(), "a");

        let guard2 = tracker.clone().register("b");
        assert_eq!(tracker.outstanding(), 2);

        drop(guard1);
        assert_eq!(tracker.outstanding(), 1);

        drop(guard2);
        assert_eq!(tracker.outstanding(), 0);
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_idle() {
        let tracker = CompletionTracker::new();
        tokio::time::timeout(Duration::from_millis(50), tracker.wait())
            .await
            .expect("nothing registered, wait should not block");
    }

    #[tokio::test]
    async fn wait_blocks_until_last_guard_drops() {
        let tracker = CompletionTracker::new();
        let guard1 = tracker.register("a");
        let guard2 = tracker.register("b");

        let waiter = {
            let tracker = tracker.clone();
            tokio::spawn(async move { tracker.wait().await })
        };

        drop(guard1);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!waiter.is_finished(), "one task is still registered");

        drop(guard2);
        tokio::time::timeout(Duration::from_millis(100), waiter)
            .await
            .expect("waiter should finish once count reaches zero")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_timeout_reports_outstanding() {
        let tracker = CompletionTracker::new();
        let _guard = tracker.register("stuck");

        let err = tracker
            .wait_timeout(Duration::from_millis(30))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LifecycleError::GraceExceeded {
                grace: Duration::from_millis(30),
                outstanding: 1,
            }
        );
        assert!(err.to_string().contains("1 timer(s) still running"));
    }

    #[test]
    fn concurrent_registration_is_exact() {
        let tracker = CompletionTracker::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let tracker = tracker.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let guard = tracker.register(&format!("t{}", i));
                        drop(guard);
                    }
                    tracker.register(&format!("held{}", i))
                })
            })
            .collect();

        let guards: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(tracker.outstanding(), 8);

        drop(guards);
        assert_eq!(tracker.outstanding(), 0);
    }
}
