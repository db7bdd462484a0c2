//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for a termination request from the OS
//! - Hand control back to the supervisor, which triggers [`Shutdown`](super::Shutdown)
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Unix: SIGINT, SIGTERM and SIGQUIT all mean shutdown
//! - Elsewhere: Ctrl-C only

/// Waits for a termination signal.
///
/// Returns `Err` if a signal handler cannot be registered.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = sigint.recv() => tracing::debug!("Received SIGINT"),
        _ = sigterm.recv() => tracing::debug!("Received SIGTERM"),
        _ = sigquit.recv() => tracing::debug!("Received SIGQUIT"),
    }
    Ok(())
}

/// Waits for a termination signal.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
