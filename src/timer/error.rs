//! Timer configuration errors.

use thiserror::Error;

/// Errors raised when a timer is started with an unusable configuration.
///
/// These are the only errors a timer ever reports; once the task is running
/// it can only end through cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The interval between ticks was zero.
    #[error("timer '{name}': interval must be greater than zero")]
    ZeroInterval { name: String },

    /// The poll quantum was zero, which would spin the loop.
    #[error("timer '{name}': poll quantum must be greater than zero")]
    ZeroPollQuantum { name: String },
}

/// Result type for timer operations.
pub type TimerResult<T> = Result<T, TimerError>;
