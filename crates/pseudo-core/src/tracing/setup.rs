//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging for the toolkit.
///
/// Reads the `PSEUDO_LOG` environment variable for per-crate log levels.
/// Format: `PSEUDO_LOG=pseudo_engine=debug,pseudo_store=warn`
///
/// Falls back to `pseudo=info` if `PSEUDO_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, false);
}

/// Initialize with an explicit filter and JSON output (for embedding hosts
/// that ship logs to a collector).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // try_init: a host may already have installed a global subscriber.
        let _ = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_file(true).with_line_number(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
