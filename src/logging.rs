//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: `info` by default, `RUST_LOG` overrides.
///
/// Logs go to stderr so `preview` output on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
