//! Tracing setup for host binaries and demos.
//!
//! The library itself only emits `tracing` events (notably the lenient-parse
//! anomaly warning); subscribing to them is the host's choice. This helper
//! wires up the usual subscriber stack for binaries that have no opinion of
//! their own.

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a formatted subscriber honoring `RUST_LOG`, defaulting to `info`.
///
/// Call once at process start; panics if a global subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("static default filter is valid");

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(ErrorLayer::default())
        .init();
}
