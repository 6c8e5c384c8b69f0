//! Integration tests for error classification
//!
//! Every failed call must surface exactly one typed error: an API failure for
//! decodable non-2xx bodies, a transport failure for anything unreadable, and
//! an argument failure before any request for bad inputs.

use integration_tests::common::{create_test_environment, error_json};
use integration_tests::{ClientConfig, Error, Matcher, Pageable, TronaldClient};
use tokio_test::assert_err;
use tronald_core::{ArgumentError, ErrorCategory, TransportError};

#[tokio::test]
async fn test_declared_error_status_is_authoritative() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/quote/abc")
        .with_status(400)
        .with_body(error_json(404, "Could not find quote."))
        .create_async()
        .await;

    let error = assert_err!(client.get_quote("abc").await);
    let api = error.as_api().expect("expected an API failure");
    assert_eq!(api.status(), 404);
    assert_eq!(api.message(), "Could not find quote.");
}

#[tokio::test]
async fn test_html_error_page_is_transport_failure() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/tags")
        .with_status(503)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Service Unavailable</body></html>")
        .create_async()
        .await;

    let error = assert_err!(client.list_tags().await);
    assert!(matches!(
        error,
        Error::Transport(TransportError::Decode { .. })
    ));
    assert!(error.as_api().is_none());
}

#[tokio::test]
async fn test_malformed_success_body_is_transport_failure() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/search/quote")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{\"total\": 3, \"_embedded\": {\"quotes\": [")
        .create_async()
        .await;

    let error = assert_err!(client.search("wall", Pageable::default()).await);
    assert_eq!(error.category(), ErrorCategory::Decode);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    let client = TronaldClient::with_config(
        ClientConfig::new().with_base_url("http://127.0.0.1:9"),
    )
    .expect("Failed to create TronaldClient");

    let error = assert_err!(client.list_tags().await);
    assert!(matches!(error, Error::Transport(TransportError::Http(_))));
    assert!(error.is_temporary());
}

#[tokio::test]
async fn test_argument_errors_never_reach_the_server() {
    let (mut server, client) = create_test_environment().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = assert_err!(client.get_quote("").await);
    assert!(matches!(
        error,
        Error::InvalidArgument(ArgumentError::Empty { name: "id" })
    ));

    let error = assert_err!(client.search("", Pageable::default()).await);
    assert_eq!(error.category(), ErrorCategory::Argument);

    assert!(Pageable::new(0, 10).is_err());
    assert!(Pageable::new(1, 0).is_err());

    mock.assert_async().await;
}
