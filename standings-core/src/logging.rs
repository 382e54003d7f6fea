//! Tracing subscriber setup shared by the server and CLI.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level` when set. Calls after the first leave the
/// existing subscriber in place.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // Errs if a global subscriber is already installed; keep that one
    let _ = subscriber.try_init();
}
