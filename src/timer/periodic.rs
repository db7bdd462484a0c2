//! The periodic signal task.
//!
//! A timer wakes every poll quantum, checks for cancellation and, once more
//! than one interval has passed since the last tick, offers a [`Tick`] to its
//! single-slot channel. A tick that finds the slot occupied is dropped.

use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::time::{self, Instant};
use tracing::Instrument;

use crate::lifecycle::{CancelSignal, CompletionGuard, CompletionTracker};
use crate::observability::metrics;
use crate::timer::error::{TimerError, TimerResult};
use crate::timer::signal::{Interval, Tick, TickReceiver};

/// Pause between cancellation and elapsed-time checks.
pub const DEFAULT_POLL_QUANTUM: Duration = Duration::from_millis(50);

/// Start a timer with the default poll quantum.
///
/// With `sleep_first` the first tick waits a full `interval`; without it the
/// first check after start already fires. The returned receiver is closed
/// once `cancel` fires and the task has stopped.
pub fn start(
    name: &str,
    interval: Duration,
    sleep_first: bool,
    cancel: CancelSignal,
    tracker: &CompletionTracker,
) -> TimerResult<TickReceiver> {
    PeriodicSignal::new(name, interval)
        .sleep_first(sleep_first)
        .start(cancel, tracker)
}

/// Builder for a single periodic timer.
#[derive(Debug, Clone)]
pub struct PeriodicSignal {
    name: String,
    interval: Duration,
    sleep_first: bool,
    poll_quantum: Duration,
}

impl PeriodicSignal {
    /// Describe a timer named `name` firing every `interval`.
    pub fn new(name: impl Into<String>, interval: Duration) -> Self {
        Self {
            name: name.into(),
            interval,
            sleep_first: false,
            poll_quantum: DEFAULT_POLL_QUANTUM,
        }
    }

    /// Wait one full interval before the first tick.
    pub fn sleep_first(mut self, sleep_first: bool) -> Self {
        self.sleep_first = sleep_first;
        self
    }

    /// Override the pause between checks.
    pub fn poll_quantum(mut self, poll_quantum: Duration) -> Self {
        self.poll_quantum = poll_quantum;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check the configuration without starting anything.
    pub fn validate(&self) -> TimerResult<Interval> {
        let interval = Interval::new(self.interval).ok_or_else(|| TimerError::ZeroInterval {
            name: self.name.clone(),
        })?;

        if self.poll_quantum.is_zero() {
            return Err(TimerError::ZeroPollQuantum {
                name: self.name.clone(),
            });
        }

        Ok(interval)
    }

    /// Validate, register with `tracker` and spawn the timer task.
    ///
    /// Must be called from within a Tokio runtime. Nothing is registered or
    /// spawned when validation fails.
    pub fn start(
        self,
        cancel: CancelSignal,
        tracker: &CompletionTracker,
    ) -> TimerResult<TickReceiver> {
        let interval = self.validate()?;

        let (tx, rx) = mpsc::channel(1);
        let guard = tracker.register(&self.name);
        let span = tracing::info_span!("timer", name = %self.name);

        let task = TimerTask {
            name: self.name.clone(),
            interval,
            sleep_first: self.sleep_first,
            poll_quantum: self.poll_quantum,
            tx,
            cancel,
            guard,
        };
        tokio::spawn(task.run().instrument(span));

        Ok(TickReceiver::new(self.name, rx))
    }
}

/// State owned by a running timer.
struct TimerTask {
    name: String,
    interval: Interval,
    sleep_first: bool,
    poll_quantum: Duration,
    tx: mpsc::Sender<Tick>,
    cancel: CancelSignal,
    guard: CompletionGuard,
}

impl TimerTask {
    async fn run(mut self) {
        tracing::debug!(
            interval_ms = self.interval.get().as_millis() as u64,
            sleep_first = self.sleep_first,
            poll_quantum_ms = self.poll_quantum.as_millis() as u64,
            "Timer started"
        );
        metrics::record_timer_started();

        // None means "never fired": the first check is already due.
        let mut last_fired = if self.sleep_first {
            Some(Instant::now())
        } else {
            None
        };

        loop {
            if self.cancel.is_cancelled() {
                break;
            }

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = time::sleep(self.poll_quantum) => {}
            }

            let now = Instant::now();
            let due = match last_fired {
                None => true,
                Some(prev) => now.duration_since(prev) > self.interval.get(),
            };
            if !due {
                continue;
            }
            last_fired = Some(now);

            match self.tx.try_send(Tick) {
                Ok(()) => metrics::record_tick_emitted(&self.name),
                Err(TrySendError::Full(_)) => {
                    tracing::trace!("Previous tick not consumed, dropping tick");
                    metrics::record_tick_dropped(&self.name);
                }
                Err(TrySendError::Closed(_)) => {
                    tracing::trace!("Tick receiver dropped, discarding tick");
                }
            }
        }

        let TimerTask { tx, guard, .. } = self;
        drop(tx);
        drop(guard);
        metrics::record_timer_stopped();
        tracing::debug!("Timer shutting down");
    }
}
