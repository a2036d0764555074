//! Typed client for the placeholder gateway's `/v1` surface.

pub mod client;

pub use client::{GatewayClient, Post};
