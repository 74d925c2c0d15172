//! Tracing subscriber for the CLI
//!
//! Events go to stderr so rendered HTML on stdout stays clean. `RUST_LOG`
//! wins when set; otherwise `--verbose` selects `debug` and the default is
//! `warn`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed when embedded in tests
    let _ = Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
