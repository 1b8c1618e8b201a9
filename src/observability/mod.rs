//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Prometheus scrape (optional)
//! ```
//!
//! Request IDs are attached to every trace span by the HTTP layer.
//! Query parameter values are never logged; they carry payment tokens.

pub mod logging;
pub mod metrics;
