//! Tracing initialization.
//! `tracing` crate with `EnvFilter`; interceptions surface as `warn` events.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Backstop tracing/logging system.
///
/// Reads the `BACKSTOP_LOG` environment variable for log levels, falling
/// back to `backstop=info` when unset or invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BACKSTOP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("backstop=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .init();
    });
}
