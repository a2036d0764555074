//! Response encoding.
//!
//! # Responsibilities
//! - Serialize resources with the upstream's exact field names
//! - Terminate JSON bodies with a newline (the relay format clients of the
//!   original surface already parse)
//! - Plain-text bodies for error statuses

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Newline-terminated JSON response.
pub fn json_body<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string(value) {
        Ok(mut body) => {
            body.push('\n');
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "response serialization failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

/// Plain-text response.
pub fn text(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_status_and_content_type() {
        let response = json_body(StatusCode::OK, &serde_json::json!({"id": 1}));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }
}
