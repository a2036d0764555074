//! HTTP gateway re-exposing a public JSON placeholder API under `/v1`.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                    GATEWAY                        │
//!                    │                                                   │
//!  Client Request    │  ┌─────────┐   ┌──────────┐   ┌──────────────┐   │
//!  ──────────────────┼─▶│  http   │──▶│ handlers │──▶│   service    │   │
//!                    │  │ server  │   │ (per     │   │ (generic     │   │
//!                    │  └─────────┘   │ resource)│   │  CRUD proxy) │   │
//!                    │                └──────────┘   └──────┬───────┘   │
//!                    │                                      │           │
//!                    │                                      ▼           │
//!  Client Response   │  ┌──────────┐                ┌──────────────┐    │
//!  ◀─────────────────┼──│ response │◀───────────────│   client     │◀───┼── Upstream
//!                    │  │ encoding │                │ (transport)  │    │   store
//!                    │  └──────────┘                └──────────────┘    │
//!                    │                                                   │
//!                    │  config · resources · observability · lifecycle  │
//!                    └──────────────────────────────────────────────────┘
//! ```
//!
//! One request maps to exactly one upstream call; nothing is cached,
//! retried, or persisted.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resources;
pub mod service;

pub use config::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
