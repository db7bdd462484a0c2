//! Shared helpers for timer integration tests.

use std::time::Duration;
use tokio::time::Instant;

use periodic_signal::TickReceiver;

/// Arrival times of every tick seen by a consumer, plus when the channel closed.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Recording {
    pub ticks: Vec<Duration>,
    pub closed_at: Duration,
}

/// Drain `ticks` promptly until the timer closes it, timing each arrival
/// relative to `origin`.
#[allow(dead_code)]
pub async fn record(mut ticks: TickReceiver, origin: Instant) -> Recording {
    let mut arrivals = Vec::new();
    while ticks.recv().await.is_some() {
        arrivals.push(origin.elapsed());
    }
    Recording {
        ticks: arrivals,
        closed_at: origin.elapsed(),
    }
}

/// Spacing between consecutive arrivals.
#[allow(dead_code)]
pub fn gaps(ticks: &[Duration]) -> Vec<Duration> {
    ticks.windows(2).map(|w| w[1] - w[0]).collect()
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
