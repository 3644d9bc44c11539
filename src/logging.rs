//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr so snapshots on stdout stay clean.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug`
/// with `verbose`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}
