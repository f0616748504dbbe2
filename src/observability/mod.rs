//! # Observability
//!
//! Two channels:
//!
//! - [`Logger`]: structured JSON lifecycle and domain events
//!   (`STORE_CONNECTED`, `FRUIT_CREATED`, `REQUEST_FAILED`, ...)
//! - [`init_tracing`]: per-request spans from the HTTP trace layer
//!
//! ```ignore
//! use fruitstand::observability::Logger;
//!
//! Logger::info("FRUIT_DELETED", &[("id", "6f1c...")]);
//! ```

mod logger;
mod trace;

pub use logger::{Logger, Severity};
pub use trace::{init_tracing, DEFAULT_TRACE_FILTER};
