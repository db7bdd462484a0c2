//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Timer tasks and the supervisor produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (tick counters, active timer gauge)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Log lines carry the timer name as a span field
//! - Metrics are cheap and inert until an exporter is installed

pub mod logging;
pub mod metrics;
