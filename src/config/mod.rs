//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → TickerConfig (validated, immutable)
//!     → startup turns each timer entry into a PeriodicSignal
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; timers cannot be retuned while running
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ObservabilityConfig;
pub use schema::ShutdownConfig;
pub use schema::TickerConfig;
pub use schema::TimerConfig;
pub use schema::TimingConfig;
pub use validation::{validate_config, ValidationError};
