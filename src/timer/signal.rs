//! Tick values and the receiving end of a timer.

use std::time::Duration;
use tokio::sync::mpsc;

pub use tokio::sync::mpsc::error::TryRecvError;

/// One elapsed interval. Carries no data; its arrival is the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tick;

/// A non-zero spacing between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(Duration);

impl Interval {
    /// Wrap a duration, rejecting zero.
    pub fn new(duration: Duration) -> Option<Self> {
        if duration.is_zero() {
            None
        } else {
            Some(Self(duration))
        }
    }

    /// The wrapped duration.
    pub fn get(&self) -> Duration {
        self.0
    }
}

impl From<Interval> for Duration {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

/// Receiving end of a timer's single-slot tick channel.
///
/// `recv` returns `None` once the timer has shut down and every buffered
/// tick has been taken.
#[derive(Debug)]
pub struct TickReceiver {
    name: String,
    inner: mpsc::Receiver<Tick>,
}

impl TickReceiver {
    pub(crate) fn new(name: String, inner: mpsc::Receiver<Tick>) -> Self {
        Self { name, inner }
    }

    /// Name of the timer feeding this receiver.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wait for the next tick.
    pub async fn recv(&mut self) -> Option<Tick> {
        self.inner.recv().await
    }

    /// Take a pending tick without waiting.
    pub fn try_recv(&mut self) -> Result<Tick, TryRecvError> {
        self.inner.try_recv()
    }

    /// True once the timer task has closed its end.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}
