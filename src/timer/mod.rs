//! Periodic signal subsystem.
//!
//! # Data Flow
//! ```text
//! Supervisor:
//!     start(name, interval, sleep_first, cancel, tracker)
//!     → validate interval / poll quantum (error before spawn)
//!     → register with CompletionTracker
//!     → spawn timer task, return TickReceiver
//!
//! Timer task (periodic.rs), every poll quantum:
//!     cancelled? → close channel → deregister → exit
//!     elapsed > interval? → try_send(Tick), drop if slot full
//! ```
//!
//! # Design Decisions
//! - Output channel has a single slot; a lagging consumer loses ticks, never stalls the loop
//! - Cancellation is cooperative and irrevocable
//! - An interval cannot change once started; start a new timer instead

pub mod error;
pub mod periodic;
pub mod signal;

pub use error::{TimerError, TimerResult};
pub use periodic::{start, PeriodicSignal, DEFAULT_POLL_QUANTUM};
pub use signal::{Interval, Tick, TickReceiver, TryRecvError};
