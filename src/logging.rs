//! Development-time tracing.
//!
//! The engines emit `tracing` events (moves applied, bridges edited, solver
//! results). Nothing is printed unless a subscriber is installed; embedding
//! applications can install their own or call [`init`].

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` if `RUST_LOG` is unset. Returns `false` if a global
/// subscriber was already installed.
///
/// # Example
/// ```bash
/// RUST_LOG=board_rules=debug cargo test
/// ```
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}
