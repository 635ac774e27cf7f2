//! Logging initialization
//!
//! Diagnostics go to stderr so that stdout stays clean for listings and JSON.

use tracing_subscriber::EnvFilter;

use crate::core::api::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
