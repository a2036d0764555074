//! Inbound HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, /v1 mounts)
//!     → handlers.rs (decode query/path/body, call the resource service)
//!     → response.rs (status mapping, newline-terminated JSON)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::MakeRequestUuid;
pub use server::GatewayServer;
