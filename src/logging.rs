//! Diagnostic tracing for the `cleanup` binary.
//!
//! Report lines go to stdout through `CleanupReporter`; this module only
//! controls the stderr diagnostics emitted with `tracing` macros.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` for
/// `cleanup` when `verbose` is on.
///
/// ```bash
/// RUST_LOG=cleanup=debug cleanup branches ~/src -m --dry-run
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    // No-op when a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,cleanup=debug")
    } else {
        EnvFilter::new("warn")
    }
}
