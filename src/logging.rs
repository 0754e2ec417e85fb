//! Tracing subscriber setup for the binary.

use crate::cli::LogLevel;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a `fmt` subscriber that writes to standard error.
///
/// Standard output carries the report and prompt only, so diagnostics must
/// never be written there. The filter comes from `--log-level`; `RUST_LOG`
/// is not consulted.
pub fn initialize(level: LogLevel) {
    let filter = EnvFilter::new(level.as_filter());

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
