//! Generic per-resource handlers.
//!
//! # Responsibilities
//! - Decode the inbound request (query filters, path id, JSON body)
//! - Invoke the matching service operation
//! - Collapse service failures to the local status table:
//!   400 bad path id or body, 404 failed get, 500 everything else
//!
//! One handler set serves all five resources; `resource_routes` instantiates
//! the router with the resource's service as state.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::http::response::{json_body, text};
use crate::resources::UpstreamResource;
use crate::service::{ListFilter, UpstreamService};

/// Router for one resource collection, mounted under `/v1/{resource}`.
pub fn resource_routes<R: UpstreamResource>(service: UpstreamService<R>) -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(fetch::<R>)
                .put(update::<R>)
                .patch(patch::<R>)
                .delete(remove::<R>),
        )
        .with_state(service)
}

/// Inbound list filters. Integers that fail to parse silently become 0,
/// which the service treats as "unfiltered".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    title: Option<String>,
    user_id: Option<String>,
    id: Option<String>,
}

impl ListParams {
    fn into_filter(self) -> ListFilter {
        ListFilter {
            title: self.title.unwrap_or_default(),
            user_id: parse_or_zero(self.user_id),
            id: parse_or_zero(self.id),
        }
    }
}

fn parse_or_zero(raw: Option<String>) -> i64 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(0)
}

async fn list<R: UpstreamResource>(
    State(service): State<UpstreamService<R>>,
    Query(params): Query<ListParams>,
) -> Response {
    match service.list(&params.into_filter()).await {
        Ok(items) => json_body(StatusCode::OK, &items),
        Err(error) => {
            tracing::warn!(resource = R::KIND, %error, "list failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

async fn fetch<R: UpstreamResource>(
    State(service): State<UpstreamService<R>>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return text(StatusCode::BAD_REQUEST, "Bad Request");
    };
    match service.get(id).await {
        Ok(resource) => json_body(StatusCode::OK, &resource),
        Err(error) => {
            tracing::warn!(resource = R::KIND, id, %error, "get failed");
            text(StatusCode::NOT_FOUND, "Not Found")
        }
    }
}

async fn create<R: UpstreamResource>(
    State(service): State<UpstreamService<R>>,
    payload: Result<Json<R>, JsonRejection>,
) -> Response {
    let Ok(Json(resource)) = payload else {
        return text(StatusCode::BAD_REQUEST, "Bad Request");
    };
    match service.create(resource).await {
        Ok(created) => json_body(StatusCode::CREATED, &created),
        Err(error) => {
            tracing::warn!(resource = R::KIND, %error, "create failed");
            // Create is the one surface that echoes the failure reason.
            text(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

async fn update<R: UpstreamResource>(
    State(service): State<UpstreamService<R>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<R>, JsonRejection>,
) -> Response {
    replace(service, id, payload).await
}

/// PATCH is a full replace, not a merge; it shares the update path so a
/// future merge implementation lands in exactly one place.
async fn patch<R: UpstreamResource>(
    State(service): State<UpstreamService<R>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<R>, JsonRejection>,
) -> Response {
    replace(service, id, payload).await
}

async fn replace<R: UpstreamResource>(
    service: UpstreamService<R>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<R>, JsonRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return text(StatusCode::BAD_REQUEST, "Bad Request");
    };
    let Ok(Json(resource)) = payload else {
        return text(StatusCode::BAD_REQUEST, "Bad Request");
    };
    match service.update(id, resource).await {
        Ok(updated) => json_body(StatusCode::OK, &updated),
        Err(error) => {
            tracing::warn!(resource = R::KIND, id, %error, "update failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

async fn remove<R: UpstreamResource>(
    State(service): State<UpstreamService<R>>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return text(StatusCode::BAD_REQUEST, "Bad Request");
    };
    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            tracing::warn!(resource = R::KIND, id, %error, "delete failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_filter_integers_default_to_zero() {
        let params = ListParams {
            title: Some("Test Title".to_string()),
            user_id: Some("abc".to_string()),
            id: None,
        };
        let filter = params.into_filter();
        assert_eq!(filter.title, "Test Title");
        assert_eq!(filter.user_id, 0);
        assert_eq!(filter.id, 0);
    }

    #[test]
    fn test_filter_integers_parse() {
        let params = ListParams {
            title: None,
            user_id: Some("10".to_string()),
            id: Some("1".to_string()),
        };
        let filter = params.into_filter();
        assert_eq!(filter.user_id, 10);
        assert_eq!(filter.id, 1);
    }
}
