//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Start timers → Hand receivers to consumers
//!
//! Shutdown (shutdown.rs, tracker.rs):
//!     Signal received → Shutdown::trigger → timers close their channels
//!     → CompletionTracker reaches zero → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT/SIGQUIT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Every timer registers before it is spawned, so a join never misses one
//! - Shutdown is one-way: once triggered it cannot be undone
//! - Shutdown has a grace period: the join gives up after the deadline

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod tracker;

pub use shutdown::{CancelSignal, Shutdown};
pub use signals::wait_for_shutdown_signal;
pub use startup::start_timers;
pub use tracker::{CompletionGuard, CompletionTracker, LifecycleError};
