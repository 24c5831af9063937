//! Kata CLI library.
//!
//! Commands for the `kata` binary plus opt-in tracing setup.
//! Enable tracing with environment variables:
//! - `RUST_LOG=kata_dispatch=debug` - dispatch resolution events
//! - `RUST_LOG=trace` - everything, including scanner tokens

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Only installs a subscriber when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
