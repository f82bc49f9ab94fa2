//! Logging setup
//!
//! Logs go to stderr only; the editor keeps no files of its own besides the
//! backups the user asks for. Level defaults to INFO and can be changed with
//! `RUST_LOG`.

use crate::error::{PathEditorError, Result};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber.
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PathEditorError::Logging(e.to_string()))?;

    tracing::info!("PATH editor v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
