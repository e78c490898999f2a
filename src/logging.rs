use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Logs go to stderr, filtered by
/// `RUST_LOG` and defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
