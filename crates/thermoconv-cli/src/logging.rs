//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Picks the filter directive used when `RUST_LOG` is unset.
pub fn default_directive(configured: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.to_string()
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the configured level.
pub fn init(configured: &str, verbose: bool) {
    let directive = default_directive(configured, verbose);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
