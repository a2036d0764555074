//! Concurrency behavior of the gateway.
//!
//! One inbound request never blocks another: the only suspending operation
//! in the pipeline is the outbound upstream call, and each request owns its
//! own.

mod common;

use std::time::{Duration, Instant};

#[tokio::test]
async fn test_slow_upstream_response_does_not_block_other_requests() {
    let upstream = common::start_mock_upstream(|_method, target| async move {
        if target == "/posts/1" {
            tokio::time::sleep(Duration::from_millis(1000)).await;
        }
        (200, r#"{"userId":1,"id":1,"title":"T","body":"B"}"#.to_string())
    })
    .await;
    let (addr, _shutdown) = common::start_gateway(&upstream.base_url()).await;
    let client = common::http_client();

    let slow = async {
        let start = Instant::now();
        let response = client
            .get(format!("http://{addr}/v1/posts/1"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        start.elapsed()
    };

    let fast = async {
        let start = Instant::now();
        let response = client
            .get(format!("http://{addr}/v1/posts/2"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        start.elapsed()
    };

    let (slow_elapsed, fast_elapsed) = tokio::join!(slow, fast);

    assert!(
        slow_elapsed >= Duration::from_millis(1000),
        "slow request finished too early: {slow_elapsed:?}"
    );
    assert!(
        fast_elapsed < Duration::from_millis(800),
        "fast request was stalled behind the slow one: {fast_elapsed:?}"
    );
}
