use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use jobhub_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchMetadata, FetchOutput, ListingFetcher,
};
use serde_json::json;

struct StubFetcher {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait::async_trait]
impl ListingFetcher for StubFetcher {
    async fn fetch(&self) -> Result<FetchOutput, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "500 Internal Server Error".to_string(),
            });
        }
        Ok(FetchOutput {
            records: vec![json!({"id": 1}), json!({"id": 2})],
            metadata: FetchMetadata {
                endpoint: "stub".to_string(),
                status: 200,
                content_type: None,
                byte_len: 20,
            },
        })
    }
}

fn engine(fail: bool) -> (EngineHandle, Arc<StubFetcher>) {
    let fetcher = Arc::new(StubFetcher {
        calls: AtomicUsize::new(0),
        fail,
    });
    (EngineHandle::with_fetcher(fetcher.clone()), fetcher)
}

#[test]
fn completion_echoes_mount_and_records() {
    let (engine, fetcher) = engine(false);
    engine.fetch_listings(7);

    let event = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");
    match event {
        EngineEvent::ListingsCompleted { mount, result } => {
            assert_eq!(mount, 7);
            let output = result.expect("stub succeeds");
            assert_eq!(output.records, vec![json!({"id": 1}), json!({"id": 2})]);
        }
    }
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert!(engine.recv_timeout(Duration::from_millis(50)).is_none());
}

#[test]
fn failures_are_reported_as_events() {
    let (engine, _fetcher) = engine(true);
    engine.fetch_listings(3);

    let EngineEvent::ListingsCompleted { mount, result } = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");
    assert_eq!(mount, 3);
    assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
}

#[test]
fn cloned_handles_share_one_event_stream() {
    let (engine, fetcher) = engine(false);
    let other = engine.clone();
    other.fetch_listings(1);
    engine.fetch_listings(2);

    let mut mounts: Vec<_> = (0..2)
        .filter_map(|_| engine.recv_timeout(Duration::from_secs(5)))
        .map(|EngineEvent::ListingsCompleted { mount, .. }| mount)
        .collect();
    mounts.sort_unstable();
    assert_eq!(mounts, vec![1, 2]);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
}
