//! Request identifiers.
//!
//! # Responsibilities
//! - Assign a unique `x-request-id` (UUID v4) to each inbound request
//! - The id is propagated onto the response for correlation
//!
//! # Design Decisions
//! - The id is added as early as possible so every log line can carry it

use http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Produces a fresh UUID v4 id per request.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
