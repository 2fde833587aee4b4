//! Logging setup
//!
//! Diagnostics go to stderr so stdout only ever carries the resolved URL.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "warn,ghopen=debug" } else { "warn" }
}

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` takes precedence over `--verbose`. Calling this twice is a no-op.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    tracing::debug!("ghopen {} logging initialized", env!("CARGO_PKG_VERSION"));
}
