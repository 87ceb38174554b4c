//! In-memory integration tests for configuration-driven dispatch.

use std::sync::Arc;

use rstest::rstest;
use tasktrack::{
    config::ServiceConfig,
    dispatch::{adapters::InMemoryDataSource, services::DispatchService},
};
use tokio::runtime::Handle;

fn service_from(content: &str, source: &Arc<InMemoryDataSource>) -> DispatchService<InMemoryDataSource> {
    let config = ServiceConfig::from_toml(content).expect("valid configuration");
    DispatchService::new(Arc::clone(source), config.dispatch(), Handle::current())
}

#[rstest]
#[case::enabled("[service]\nasync-enabled = true\n", "Async Processed: data-1")]
#[case::disabled("[service]\nasync-enabled = false\n", "Sync Processed: data-1")]
#[case::unset("", "Sync Processed: data-1")]
#[tokio::test(flavor = "multi_thread")]
async fn configured_mode_selects_prefix(#[case] content: &str, #[case] expected: &str) {
    let source = Arc::new(InMemoryDataSource::new());
    source.set_response("id-1", "data-1").expect("response registers");

    let result = service_from(content, &source).execute("id-1").await;

    assert_eq!(result.expect("fetch succeeds"), expected);
    assert_eq!(source.call_count().expect("count is readable"), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_background_dispatches_are_independent() {
    let source = Arc::new(InMemoryDataSource::new());
    let service = service_from("[service]\nasync-enabled = true\n", &source);

    let handles: Vec<_> = (0..8).map(|n| service.execute(format!("item-{n}"))).collect();
    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.expect("fetch succeeds"));
    }

    let expected: Vec<String> = (0..8).map(|n| format!("Async Processed: item-{n}")).collect();
    assert_eq!(results, expected);
    assert_eq!(source.call_count().expect("count is readable"), 8);
}
