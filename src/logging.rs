//! Logging init for hosts that have no subscriber of their own.
//!
//! The only log output this crate produces on its own is the one-time
//! registration outcome; per-request results travel through each
//! request's `Result`. Hosts with an existing `tracing` subscriber can
//! skip this entirely.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. Honors `RUST_LOG`; defaults
/// to `info` globally and `debug` for this crate. Errors if a global
/// subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,file_intercept=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
