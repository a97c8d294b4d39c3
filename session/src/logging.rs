//! Tracing subscriber setup.
//!
//! Library crates only emit through `tracing`; binaries call [`init`] once.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns false when a
/// global subscriber was already installed, in which case nothing changes.
pub fn init(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
