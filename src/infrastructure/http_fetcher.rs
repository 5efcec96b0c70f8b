//! HTTP-based external example fetcher

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::core::error::{Error, Result};
use crate::renderer::traits::{ExampleFetcher, FetchResponse};

/// Fetches `externalValue` examples from HTTP/HTTPS URLs with a blocking client
#[derive(Debug, Clone)]
pub struct HttpExampleFetcher {
    client: Client,
}

impl HttpExampleFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl ExampleFetcher for HttpExampleFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        let parsed = Url::parse(url).map_err(|e| Error::fetch(url, e))?;
        // Only handle HTTP(S) URLs
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::fetch(
                url,
                format!("unsupported URL scheme '{}'", parsed.scheme()),
            ));
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|e| Error::fetch(url, e))?;

        // Check status and get content type before consuming response
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().map_err(|e| Error::fetch(url, e))?;

        Ok(FetchResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetch_blocking(url: String) -> Result<FetchResponse> {
        let fetcher = HttpExampleFetcher::new(Duration::from_secs(5))?;
        fetcher.get(&url)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_http_fetcher_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/json/examples/test.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"foo": "bar", "baz": 42}"#, "application/json"),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/json/examples/test.json", mock_server.uri());
        let response = tokio::task::spawn_blocking(move || fetch_blocking(url))
            .await
            .unwrap()
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(response.body, r#"{"foo": "bar", "baz": 42}"#);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_http_fetcher_returns_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/notfound"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/notfound", mock_server.uri());
        let response = tokio::task::spawn_blocking(move || fetch_blocking(url))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[test]
    fn test_http_fetcher_rejects_non_http_url() {
        let fetcher = HttpExampleFetcher::new(Duration::from_secs(1)).unwrap();

        match fetcher.get("file:///etc/passwd") {
            Err(Error::Fetch { reason, .. }) => assert!(reason.contains("unsupported URL scheme")),
            other => panic!("Expected Fetch error, got {other:?}"),
        }
        assert!(matches!(fetcher.get("not a url"), Err(Error::Fetch { .. })));
    }

    #[test]
    fn test_http_fetcher_connection_failure() {
        let fetcher = HttpExampleFetcher::new(Duration::from_secs(1)).unwrap();
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let result = fetcher.get("http://127.0.0.1:9/example.json");
        assert!(matches!(result, Err(Error::Fetch { .. })));
    }
}
