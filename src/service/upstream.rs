//! Generic upstream CRUD proxy.
//!
//! # Responsibilities
//! - Build outbound requests for list/get/create/update/delete
//! - Append list filters as query parameters (zero/empty = unfiltered)
//! - Validate payloads before create, never before update
//! - Interpret upstream status codes and decode JSON bodies

use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use url::Url;

use crate::client::HttpTransport;
use crate::resources::UpstreamResource;
use crate::service::ServiceError;

/// Optional list filters.
///
/// Zero and empty mean "unfiltered"; a legitimate `id=0` or empty title is
/// indistinguishable from an absent filter. Accepted limitation inherited
/// from the upstream query surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub title: String,
    pub user_id: i64,
    pub id: i64,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.user_id == 0 && self.id == 0
    }
}

/// Proxy for one upstream resource collection.
///
/// Holds the transport handle and the collection's base URL, configured once
/// at startup and read-only thereafter. Operations are stateless and
/// independent; no operation depends on the outcome of a previous one.
pub struct UpstreamService<R> {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for UpstreamService<R> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: UpstreamResource> UpstreamService<R> {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            _resource: PhantomData,
        }
    }

    /// Fetch the collection, filtered.
    ///
    /// The status code is not inspected; upstream success is assumed for
    /// list and a non-JSON body surfaces as `Decode`.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<R>, ServiceError> {
        let url = self.list_url(filter);
        let response = self
            .transport
            .send(Method::GET, url, None, HeaderMap::new())
            .await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Fetch one resource by id.
    ///
    /// The status code is not inspected before decoding: a non-200 carrying
    /// a JSON-shaped body decodes as a resource. Kept to relay upstream
    /// behavior verbatim.
    pub async fn get(&self, id: i64) -> Result<R, ServiceError> {
        let response = self
            .transport
            .send(Method::GET, self.item_url(id), None, HeaderMap::new())
            .await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Create a resource upstream. Field checks run first; a failing payload
    /// never reaches the network.
    pub async fn create(&self, resource: R) -> Result<R, ServiceError> {
        let problems = resource.validate();
        if !problems.is_empty() {
            return Err(ServiceError::Validation { problems });
        }

        let body = Bytes::from(serde_json::to_vec(&resource)?);
        let response = self
            .transport
            .send(Method::POST, self.base_url.clone(), Some(body), json_headers())
            .await?;
        if response.status != StatusCode::CREATED {
            return Err(ServiceError::Upstream {
                status: response.status.as_u16(),
            });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Replace a resource upstream. No pre-validation: update and patch
    /// accept partial payloads.
    pub async fn update(&self, id: i64, resource: R) -> Result<R, ServiceError> {
        let body = Bytes::from(serde_json::to_vec(&resource)?);
        let response = self
            .transport
            .send(Method::PUT, self.item_url(id), Some(body), json_headers())
            .await?;
        if response.status != StatusCode::OK {
            return Err(ServiceError::Upstream {
                status: response.status.as_u16(),
            });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Delete a resource upstream.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let response = self
            .transport
            .send(Method::DELETE, self.item_url(id), None, HeaderMap::new())
            .await?;
        if response.status != StatusCode::OK {
            return Err(ServiceError::Upstream {
                status: response.status.as_u16(),
            });
        }
        Ok(())
    }

    /// Collection URL with filters appended in alphabetical key order,
    /// form-urlencoded (space becomes `+`).
    fn list_url(&self, filter: &ListFilter) -> Url {
        let mut url = self.base_url.clone();
        if filter.is_empty() {
            return url;
        }
        let mut pairs = url.query_pairs_mut();
        if filter.id != 0 {
            pairs.append_pair("id", &filter.id.to_string());
        }
        if !filter.title.is_empty() {
            pairs.append_pair("title", &filter.title);
        }
        if filter.user_id != 0 {
            pairs.append_pair("userId", &filter.user_id.to_string());
        }
        drop(pairs);
        url
    }

    fn item_url(&self, id: i64) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers
}
