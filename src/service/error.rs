//! Service failure taxonomy.
//!
//! Four tagged kinds replace stringly status formatting: a transport failure
//! never carries a status code, so nothing can read one off an absent
//! response.

use thiserror::Error;

use crate::client::TransportError;

/// Failure kinds surfaced by the resource services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The outbound call never produced a response. Never retried.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The payload failed create-time field checks; no network call was made.
    #[error("validation failed: {}", join(.problems))]
    Validation { problems: Vec<String> },

    /// The upstream answered with an unexpected status code.
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    /// The body did not round-trip as the expected JSON shape, regardless of
    /// status code.
    #[error("malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Upstream status code, when this failure carries one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ServiceError::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}

fn join(problems: &[String]) -> String {
    problems.join("; ")
}
