//! Resource services.
//!
//! # Data Flow
//! ```text
//! handler call (list/get/create/update/delete)
//!     → upstream.rs builds the outbound request
//!     → client::HttpTransport executes it
//!     → upstream.rs interprets the status and decodes the JSON body
//!     → tagged ServiceError or decoded resource back to the handler
//! ```
//!
//! One generic service covers all five resource collections; the per-resource
//! differences (path segment, validation rules, extra fields) live on the
//! resource types themselves.

pub mod error;
pub mod upstream;

pub use error::ServiceError;
pub use upstream::{ListFilter, UpstreamService};
