//! Logging and tracing configuration
//!
//! Diagnostics go to stderr; stdout is reserved for the request/reply
//! transcript so it can be diffed or grepped by callers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "smarttv=warn,warn";

/// Initialize tracing for the CLI binaries (stderr logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
pub fn init_cli() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
