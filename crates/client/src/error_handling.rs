use reqwest::Response;
use serde::Deserialize;
use tracing::warn;
use tronald_core::{Error, Result, TransportError};

/// Error body returned with every non-2xx response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: u16,
    #[serde(default)]
    message: Option<String>,
}

/// Classify a response by status.
///
/// 2xx responses are passed through. Anything else has its JSON error body
/// decoded into an API failure carrying the status and message declared in
/// the body; a body that cannot be read or decoded is a transport failure.
pub(crate) async fn handle_http_response(response: Response, context: &str) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await?;

    warn!(
        url = %url,
        status = %status,
        context = %context,
        "HTTP request failed"
    );

    Err(parse_error_body(&body, context))
}

/// Decode an error body into the error it describes
pub(crate) fn parse_error_body(body: &str, context: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => Error::api(error.status, error.message.unwrap_or_default()),
        Err(e) => TransportError::decode(format!("{context} error response"), e).into(),
    }
}

/// Read the whole body and decode it as JSON
pub(crate) async fn parse_json_response<T>(response: Response, context: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let body = response.text().await?;
    parse_json_body(&body, context)
}

pub(crate) fn parse_json_body<T>(body: &str, context: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| TransportError::decode(context, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use reqwest::Client;
    use tronald_core::ErrorCategory;

    async fn fetch(server: &Server, path: &str) -> Response {
        Client::new()
            .get(format!("{}{path}", server.url()))
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_handle_http_response_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let response = fetch(&server, "/test").await;
        let result = handle_http_response(response, "test operation").await;
        assert!(result.is_ok());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_handle_http_response_404() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/test")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":404,"message":"Could not find a random quote."}"#)
            .create_async()
            .await;

        let response = fetch(&server, "/test").await;
        let error = handle_http_response(response, "test operation")
            .await
            .unwrap_err();

        let api = error.as_api().expect("expected an API failure");
        assert_eq!(api.status(), 404);
        assert_eq!(api.message(), "Could not find a random quote.");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_declared_status_wins_over_status_line() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/test")
            .with_status(500)
            .with_body(r#"{"status":418,"message":"teapot"}"#)
            .create_async()
            .await;

        let response = fetch(&server, "/test").await;
        let error = handle_http_response(response, "test").await.unwrap_err();
        assert_eq!(error.as_api().map(|e| e.status()), Some(418));
    }

    #[tokio::test]
    async fn test_malformed_error_body_is_transport_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/test")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let response = fetch(&server, "/test").await;
        let error = handle_http_response(response, "test").await.unwrap_err();
        assert!(error.as_api().is_none());
        assert_eq!(error.category(), ErrorCategory::Decode);
    }

    #[test]
    fn test_error_body_without_status_is_transport_failure() {
        let error = parse_error_body(r#"{"message":"nope"}"#, "tags");
        assert!(matches!(
            error,
            Error::Transport(TransportError::Decode { .. })
        ));
    }

    #[test]
    fn test_error_body_without_message() {
        let error = parse_error_body(r#"{"status":400}"#, "tags");
        let api = error.as_api().unwrap();
        assert_eq!(api.status(), 400);
        assert_eq!(api.message(), "");
    }

    #[test]
    fn test_parse_json_body_reports_context() {
        let error = parse_json_body::<serde_json::Value>("{", "search results").unwrap_err();
        assert!(error.to_string().contains("search results"));
    }
}
