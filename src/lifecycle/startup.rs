//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn each configured timer into a [`PeriodicSignal`]
//! - Validate all of them before any is spawned
//! - Start them against one shared shutdown and completion tracker
//!
//! # Design Decisions
//! - Fail fast: one bad timer means nothing starts
//! - Timers start in configuration order

use crate::config::TickerConfig;
use crate::lifecycle::{CompletionTracker, Shutdown};
use crate::timer::{PeriodicSignal, TickReceiver, TimerResult};

/// Build the timer descriptions for a configuration.
pub fn timers_from_config(config: &TickerConfig) -> Vec<PeriodicSignal> {
    let poll_quantum = config.timing.poll_quantum();
    config
        .timers
        .iter()
        .map(|timer| {
            PeriodicSignal::new(timer.name.clone(), timer.interval())
                .sleep_first(timer.sleep_first)
                .poll_quantum(poll_quantum)
        })
        .collect()
}

/// Start every configured timer.
///
/// Receivers come back in configuration order.
pub fn start_timers(
    config: &TickerConfig,
    shutdown: &Shutdown,
    tracker: &CompletionTracker,
) -> TimerResult<Vec<TickReceiver>> {
    let timers = timers_from_config(config);

    for timer in &timers {
        timer.validate()?;
    }

    let mut receivers = Vec::with_capacity(timers.len());
    for timer in timers {
        tracing::info!(name = %timer.name(), "Starting timer");
        receivers.push(timer.start(shutdown.subscribe(), tracker)?);
    }

    Ok(receivers)
}
