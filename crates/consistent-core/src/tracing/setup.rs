//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "CONSISTENT_LOG";

/// Initialize logging.
///
/// Reads `CONSISTENT_LOG` for filter directives, e.g.
/// `CONSISTENT_LOG=consistent_analysis=debug`. Falls back to info for the
/// library crates and the binary when unset or invalid. Output goes to
/// stderr; stdout is reserved for the warning report.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("consistent=info,go_consistent=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
