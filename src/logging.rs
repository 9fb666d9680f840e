//! Tracing subscriber setup.
//!
//! Hosts that already install their own subscriber can skip this entirely;
//! the engine only emits `tracing` events.

use crate::constants::DEFAULT_LOG_FILTER;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install a fmt subscriber filtered by `RUST_LOG` (default `humanpdf=info`).
///
/// Safe to call more than once; only the first call has an effect. If another
/// subscriber is already registered globally it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
