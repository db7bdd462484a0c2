//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the ticker.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::timer::DEFAULT_POLL_QUANTUM;

/// Root configuration for the ticker daemon.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TickerConfig {
    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Loop timing shared by all timers.
    pub timing: TimingConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,

    /// Timer definitions, one background task each.
    pub timers: Vec<TimerConfig>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig::default(),
            timing: TimingConfig::default(),
            shutdown: ShutdownConfig::default(),
            timers: vec![TimerConfig {
                name: "heartbeat".to_string(),
                interval_ms: 1000,
                sleep_first: false,
            }],
        }
    }
}

/// A single periodic timer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimerConfig {
    /// Timer identifier for logging/metrics.
    pub name: String,

    /// Minimum spacing between ticks in milliseconds.
    pub interval_ms: u64,

    /// Wait one full interval before the first tick.
    #[serde(default)]
    pub sleep_first: bool,
}

impl TimerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Timing of the polling loop.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause between cancellation checks in milliseconds.
    /// Bounds both shutdown latency and tick jitter.
    pub poll_quantum_ms: u64,
}

impl TimingConfig {
    pub fn poll_quantum(&self) -> Duration {
        Duration::from_millis(self.poll_quantum_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_quantum_ms: DEFAULT_POLL_QUANTUM.as_millis() as u64,
        }
    }
}

/// Graceful shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long to wait for timers to exit, in seconds.
    pub grace_secs: u64,
}

impl ShutdownConfig {
    pub fn grace(&self) -> Duration {
        Duration::from_secs(self.grace_secs)
    }
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { grace_secs: 5 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
