//! Shared utilities for gateway integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::Request;
use axum::http::Response;
use axum::Router;
use tokio::net::TcpListener;

use placeholder_gateway::{GatewayConfig, GatewayServer, Shutdown};

/// Handle to a running mock upstream.
#[derive(Clone)]
pub struct MockUpstream {
    addr: SocketAddr,
    hits: Arc<AtomicU32>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests the upstream has served.
    #[allow(dead_code)]
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Every request seen so far, as "METHOD path?query" lines.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

/// Start a programmable mock upstream; the responder maps (method,
/// path-and-query) to (status, body).
pub async fn start_mock_upstream<F, Fut>(responder: F) -> MockUpstream
where
    F: Fn(String, String) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let hits = Arc::new(AtomicU32::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let handler_hits = hits.clone();
    let handler_seen = seen.clone();
    let app = Router::new().fallback(move |request: Request| {
        let hits = handler_hits.clone();
        let seen = handler_seen.clone();
        let responder = responder.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            let method = request.method().to_string();
            let target = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| request.uri().path().to_string());
            seen.lock().unwrap().push(format!("{method} {target}"));

            let (status, body) = responder(method, target).await;
            Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap()
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, hits, seen }
}

/// Boot a gateway on an ephemeral port, pointed at the given upstream.
///
/// The returned `Shutdown` must stay alive for the test's duration;
/// dropping it stops the server.
pub async fn start_gateway(upstream_url: &str) -> (SocketAddr, Shutdown) {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = upstream_url.to_string();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = GatewayServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (addr, shutdown)
}

/// Client with environment proxies disabled; loopback traffic must never
/// route through one.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
