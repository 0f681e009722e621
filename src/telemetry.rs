//! Tracing subscriber bootstrap for binaries embedding the reports service.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a global formatting subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, so
/// repeated calls are harmless.
#[must_use]
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
