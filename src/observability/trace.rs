//! HTTP request tracing
//!
//! Request spans come from `tower_http::trace::TraceLayer`; this installs the
//! subscriber that prints them.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_TRACE_FILTER: &str = "fruitstand=info,tower_http=info";

/// Install the global tracing subscriber, writing to stderr
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
