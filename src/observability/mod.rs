//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counter + latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - The request ID flows through every log line via the trace layer
//! - Metric updates are cheap (atomic increments); labels are method,
//!   resource, status

pub mod logging;
pub mod metrics;
