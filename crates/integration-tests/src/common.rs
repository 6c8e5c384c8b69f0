//! Common utilities for integration tests

use crate::*;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`, defaulting to debug output for the client crates.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("tronald_client=debug,tronald_core=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Start a mock API server and a client pointed at it
pub async fn create_test_environment() -> (ServerGuard, TronaldClient) {
    init_tracing();
    let server = Server::new_async().await;
    let client = TronaldClient::with_config(ClientConfig::new().with_base_url(server.url()))
        .expect("Failed to create TronaldClient");
    (server, client)
}

/// Quote body shaped like the live API, including fields the client ignores
pub fn quote_json(id: &str, value: &str, tags: &[&str]) -> Value {
    json!({
        "quote_id": id,
        "value": value,
        "appeared_at": "2016-08-31T00:00:00",
        "created_at": "2016-11-20T01:38:53.147Z",
        "tags": tags,
        "_links": {"self": {"href": format!("/quote/{id}")}},
        "_embedded": {
            "author": [{"name": "Donald Trump"}],
            "source": [{"url": format!("https://twitter.com/realDonaldTrump/status/{id}")}]
        }
    })
}

/// Search body holding `count` generated quotes starting at `first_index`
pub fn search_json(first_index: usize, count: usize, total: u64) -> Value {
    let quotes: Vec<Value> = (first_index..first_index + count)
        .map(|i| quote_json(&format!("q{i}"), &format!("Quote number {i}"), &["Wall"]))
        .collect();

    json!({
        "count": count,
        "total": total,
        "_embedded": {"quotes": quotes}
    })
}

/// Error body as returned by the API for non-2xx responses
pub fn error_json(status: u16, message: &str) -> String {
    json!({"status": status, "message": message}).to_string()
}

/// Query matcher for one search request
pub fn search_query(query: &str, page: u32, size: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("query".to_string(), query.to_string()),
        Matcher::UrlEncoded("page".to_string(), page.to_string()),
        Matcher::UrlEncoded("size".to_string(), size.to_string()),
    ])
}
