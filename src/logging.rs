//! Logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for a command-line run.
///
/// Logs go to stderr so they never mix with an output file written to
/// stdout-adjacent paths, and the level defaults to `warn` unless `RUST_LOG`
/// overrides it. Calling this twice is a no-op rather than a panic.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
