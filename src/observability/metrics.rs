//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ticker_ticks_emitted_total` (counter): ticks handed to a consumer, by timer
//! - `ticker_ticks_dropped_total` (counter): ticks dropped because the slot was full, by timer
//! - `ticker_active_timers` (gauge): timer tasks currently running
//!
//! Until [`init_metrics`] installs a recorder every call here is a no-op.

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter and serve it on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_tick_emitted(timer: &str) {
    counter!("ticker_ticks_emitted_total", "timer" => timer.to_owned()).increment(1);
}

pub fn record_tick_dropped(timer: &str) {
    counter!("ticker_ticks_dropped_total", "timer" => timer.to_owned()).increment(1);
}

pub fn record_timer_started() {
    gauge!("ticker_active_timers").increment(1.0);
}

pub fn record_timer_stopped() {
    gauge!("ticker_active_timers").decrement(1.0);
}
