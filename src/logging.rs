//! Subscriber setup for the binaries. The library only emits events.

use tracing_subscriber::EnvFilter;

/// Install a formatted stderr subscriber filtered by `RUST_LOG`, falling
/// back to `info`. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
