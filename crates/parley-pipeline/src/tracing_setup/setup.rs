//! Tracing initialization.

use std::sync::Once;

use parley_core::config::defaults::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for the Parley crates.
///
/// Reads `PARLEY_LOG` for per-crate levels, e.g.
/// `PARLEY_LOG=parley_store=debug,parley_intents=info`.
/// Falls back to `parley=info` when unset or invalid.
///
/// Idempotent. Leaves an already-installed global subscriber alone.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Like [`init_tracing`] with an explicit filter directive, ignoring `PARLEY_LOG`.
pub fn init_tracing_with_filter(directives: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
