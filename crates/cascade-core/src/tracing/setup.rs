//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "CASCADE_LOG";

/// Filter applied when `CASCADE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "cascade=info";

/// Initialize the Cascade tracing/logging system.
///
/// Reads the `CASCADE_LOG` environment variable for per-module log levels.
/// Format: `CASCADE_LOG=cascade_analysis=debug,cascade_core=warn`
///
/// Falls back to `cascade=info` if `CASCADE_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for embedding or tests).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // A host application may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
