//! Observability for rbf-props
//!
//! Structured `tracing` events with SCREAMING_SNAKE names, e.g.
//!
//! ```ignore
//! tracing::info!(event = "PROPERTY_UPDATED", name = %name, path = %path.display());
//! ```
//!
//! Output always goes to stderr so `query` results stay clean on stdout.

mod logger;

pub use logger::{init, LogFormat, Severity, LOG_ENV};
