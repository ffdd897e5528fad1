#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. `RUST_LOG` wins when set; otherwise the
//! level comes from the `-v` count.

use tracing_subscriber::EnvFilter;

/// Initializes stderr logging.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
