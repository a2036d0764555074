//! HTTP server setup and wiring.
//!
//! # Responsibilities
//! - Construct one upstream service per resource
//! - Build the Axum router for the /v1 surface plus the /ping heartbeat
//! - Wire up middleware (trace, request ID, timeout, body limit, CORS,
//!   request metrics)
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::http::{header, HeaderName, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::client::{HttpTransport, RestClient};
use crate::config::{ConfigError, GatewayConfig};
use crate::http::handlers::resource_routes;
use crate::http::request::MakeRequestUuid;
use crate::observability::metrics;
use crate::resources::{Album, Comment, Post, Todo, User, UpstreamResource};
use crate::service::UpstreamService;

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Build the server and its five resource services. The shared transport
    /// is the only outbound client in the process.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let transport: Arc<dyn HttpTransport> = Arc::new(RestClient::new());
        let router = Self::build_router(&config, transport)?;
        Ok(Self { router, config })
    }

    fn build_router(
        config: &GatewayConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Router, ConfigError> {
        let v1 = Router::new()
            .nest("/albums", routes_for::<Album>(config, transport.clone())?)
            .nest("/comments", routes_for::<Comment>(config, transport.clone())?)
            .nest("/posts", routes_for::<Post>(config, transport.clone())?)
            .nest("/todos", routes_for::<Todo>(config, transport.clone())?)
            .nest("/users", routes_for::<User>(config, transport)?);

        Ok(Router::new()
            .nest("/v1", v1)
            .route("/ping", get(ping))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.listener.body_limit_bytes))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
            .layer(middleware::from_fn(track_request)))
    }

    /// Serve on the given listener until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

fn routes_for<R: UpstreamResource>(
    config: &GatewayConfig,
    transport: Arc<dyn HttpTransport>,
) -> Result<Router, ConfigError> {
    let base_url = config.upstream.resource_url(R::PATH)?;
    Ok(resource_routes(UpstreamService::<R>::new(transport, base_url)))
}

/// Heartbeat probe; answers without any upstream involvement.
async fn ping() -> &'static str {
    "."
}

/// CORS policy of the original surface: any origin, the six verbs the
/// resources support, 5 minute preflight cache.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .max_age(Duration::from_secs(300))
}

async fn track_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let resource = resource_label(request.uri().path());
    let response = next.run(request).await;
    metrics::record_request(&method, response.status().as_u16(), &resource, start);
    response
}

/// Resource segment under /v1, or the raw first segment for everything else.
fn resource_label(path: &str) -> String {
    let mut segments = path.trim_start_matches('/').split('/');
    match segments.next() {
        Some("v1") => segments.next().unwrap_or("v1").to_string(),
        Some(first) if !first.is_empty() => first.to_string(),
        _ => "root".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_label_extracts_v1_segment() {
        assert_eq!(resource_label("/v1/posts/1"), "posts");
        assert_eq!(resource_label("/v1/albums"), "albums");
        assert_eq!(resource_label("/ping"), "ping");
        assert_eq!(resource_label("/"), "root");
    }
}
