//! Periodic signal generator.
//!
//! Background timers that emit a content-free [`Tick`] once per interval
//! until cancelled, for driving recurring work such as polling and
//! heartbeats.
//!
//! ```no_run
//! use std::time::Duration;
//! use periodic_signal::{start, CompletionTracker, Shutdown};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let shutdown = Shutdown::new();
//! let tracker = CompletionTracker::new();
//!
//! let mut ticks = start("poll", Duration::from_secs(1), false, shutdown.subscribe(), &tracker)?;
//! while ticks.recv().await.is_some() {
//!     // do the recurring work; call shutdown.trigger() to stop
//! #   shutdown.trigger();
//! }
//! tracker.wait().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod timer;

pub use config::TickerConfig;
pub use lifecycle::{CancelSignal, CompletionTracker, LifecycleError, Shutdown};
pub use timer::{start, PeriodicSignal, Tick, TickReceiver, TimerError};
