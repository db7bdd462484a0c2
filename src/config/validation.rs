//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals > 0, quantum > 0, grace > 0)
//! - Reject duplicate or empty timer names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TickerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::TickerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("timer #{index} has an empty name")]
    EmptyTimerName { index: usize },

    #[error("timer name '{0}' is used more than once")]
    DuplicateTimerName(String),

    #[error("timer '{0}' has a zero interval")]
    ZeroInterval(String),

    #[error("timing.poll_quantum_ms must be greater than zero")]
    ZeroPollQuantum,

    #[error("shutdown.grace_secs must be greater than zero")]
    ZeroGracePeriod,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &TickerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (index, timer) in config.timers.iter().enumerate() {
        if timer.name.trim().is_empty() {
            errors.push(ValidationError::EmptyTimerName { index });
        } else if !seen.insert(timer.name.as_str()) {
            errors.push(ValidationError::DuplicateTimerName(timer.name.clone()));
        }

        if timer.interval_ms == 0 {
            errors.push(ValidationError::ZeroInterval(timer.name.clone()));
        }
    }

    if config.timing.poll_quantum_ms == 0 {
        errors.push(ValidationError::ZeroPollQuantum);
    }

    if config.shutdown.grace_secs == 0 {
        errors.push(ValidationError::ZeroGracePeriod);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
