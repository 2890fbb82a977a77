//! Tracing subscriber setup for the `apex-themegen` binary.

use tracing_subscriber::EnvFilter;

use crate::error::ThemegenError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact stderr subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, falling back to
/// [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns [`ThemegenError::Logging`] when a global subscriber is already
/// installed.
pub fn init(is_verbose: bool) -> Result<(), ThemegenError> {
    let filter = if is_verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| ThemegenError::Logging(err.to_string()))
}
