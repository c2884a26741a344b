//! Diagnostic logging for the CLI.
//!
//! Events go to stderr so stdout carries only the generated URL, search
//! results, or JSON. The filter is read from `FIORI_LOG` using `EnvFilter`
//! directives (e.g. `FIORI_LOG=fiori_url=debug`).

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FIORI_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "fiori_url=debug" } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
