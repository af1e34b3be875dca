//! Tracing subscriber setup for the `tracing` status sink.
//!
//! Installs a global fmt subscriber writing to stderr. The filter comes from
//! `RUST_LOG` when set and defaults to `load_status=info`.

use tracing_subscriber::{fmt, EnvFilter};

use crate::shared::error::LoadStatusError;
use crate::shared::Result;

const DEFAULT_FILTER: &str = "load_status=info";

/// Builds the filter, falling back to the default directive
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the global subscriber.
///
/// Fails if another global subscriber is already installed.
pub fn init(ansi: bool) -> Result<()> {
    let subscriber = fmt()
        .with_env_filter(build_env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(LoadStatusError::LoggingInit)?;
    Ok(())
}
