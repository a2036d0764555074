//! Upstream resource shapes.
//!
//! # Data Flow
//! ```text
//! inbound JSON body ──▶ Resource (serde, zero defaults for absent fields)
//!     ──▶ validate() before create
//!     ──▶ serialized verbatim onto the outbound request
//! upstream JSON body ──▶ Resource ──▶ serialized onto the inbound response
//! ```
//!
//! # Design Decisions
//! - Field names are exactly the upstream's camelCase names; nothing is
//!   renamed on the way through
//! - Missing fields decode to their zero values (`0`, `""`, `false`), the
//!   same convention the filter layer uses for "unset"
//! - `id` is never client-generated: zero on create, path parameter otherwise

pub mod album;
pub mod comment;
pub mod post;
pub mod todo;
pub mod user;

pub use album::Album;
pub use comment::Comment;
pub use post::Post;
pub use todo::Todo;
pub use user::User;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A flat record proxied to one upstream collection.
///
/// Implementations exist only as in-flight payloads; no state is held
/// between requests.
pub trait UpstreamResource:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    /// Singular name used in logs and error text.
    const KIND: &'static str;

    /// Path segment under the upstream base URL.
    const PATH: &'static str;

    /// Create-time field checks. Returns one message per failing field;
    /// empty means the payload is acceptable.
    fn validate(&self) -> Vec<String>;
}

/// `userId` is required on create; zero marks it absent.
pub(crate) fn require_user_id(user_id: i64) -> Option<String> {
    (user_id == 0).then(|| "userId is required".to_string())
}

/// Length bounds in characters, inclusive. An empty value always fails.
pub(crate) fn check_bounds(field: &str, value: &str, min: usize, max: usize) -> Option<String> {
    let len = value.chars().count();
    (len < min || len > max)
        .then(|| format!("{field} must be between {min} and {max} characters"))
}
