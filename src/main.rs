//! ticker daemon
//!
//! Runs the timers listed in a TOML config, logs every tick and shuts them
//! all down cleanly on SIGINT/SIGTERM.
//!
//! ```text
//!   config ──▶ start_timers ──▶ PeriodicSignal ×N ──▶ TickReceiver ──▶ consumer task
//!                                     ▲                                     │
//!   OS signal ──▶ Shutdown::trigger ──┘          CompletionTracker ◀── timers exit
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use periodic_signal::config::{load_config, validate_config, ConfigError, TickerConfig};
use periodic_signal::lifecycle::{start_timers, wait_for_shutdown_signal};
use periodic_signal::observability::{logging, metrics};
use periodic_signal::{CompletionTracker, Shutdown, TickReceiver};

#[derive(Parser)]
#[command(name = "ticker")]
#[command(about = "Emit periodic ticks until shut down", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override observability.log_level
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TickerConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);

    tracing::info!("ticker v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        timers = config.timers.len(),
        poll_quantum_ms = config.timing.poll_quantum_ms,
        grace_secs = config.shutdown.grace_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let tracker = CompletionTracker::new();

    let receivers = start_timers(&config, &shutdown, &tracker)?;
    let consumers: Vec<_> = receivers
        .into_iter()
        .map(|ticks| tokio::spawn(consume(ticks)))
        .collect();

    if let Err(e) = wait_for_shutdown_signal().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signals, stopping");
    }

    shutdown.trigger();
    tracker.wait_timeout(config.shutdown.grace()).await?;

    for consumer in consumers {
        let _ = consumer.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Log every tick until the timer closes its channel.
async fn consume(mut ticks: TickReceiver) {
    let mut count: u64 = 0;
    while ticks.recv().await.is_some() {
        count += 1;
        tracing::info!(timer = %ticks.name(), count, "Tick");
    }
    tracing::debug!(timer = %ticks.name(), total = count, "Tick channel closed");
}
