//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr so stdout stays the output area.
pub fn init_logging(verbose: bool) -> Result<(), AppError> {
    let fallback = if verbose { "transfer_panel=debug" } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
