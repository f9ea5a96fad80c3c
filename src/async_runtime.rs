//! Shared async runtime for host-side background work
//!
//! Menu handlers run on the UI thread and must not block it. Host work
//! with a completion callback (the session cache purge) is spawned here.

use std::future::Future;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

static TOKIO_RT: OnceLock<Runtime> = OnceLock::new();

/// Initialize the Tokio runtime (called from main)
pub fn init() -> Result<()> {
    if TOKIO_RT.get().is_some() {
        return Ok(());
    }

    log::info!("Initializing shared tokio runtime");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    // Lost race: another caller installed one first, drop ours
    let _ = TOKIO_RT.set(runtime);
    Ok(())
}

/// Get the runtime
pub fn runtime() -> Result<&'static Runtime> {
    TOKIO_RT.get().context("Tokio runtime not initialized")
}

/// Spawn a background task on the runtime
pub fn spawn<F>(future: F) -> Result<JoinHandle<()>>
where
    F: Future<Output = ()> + Send + 'static,
{
    Ok(runtime()?.spawn(future))
}
