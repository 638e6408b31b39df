//! HTTP adapter for the adventure search API
//!
//! `POST {base}/api/adventures/search` with `{"prompt": "..."}`, answered
//! by a JSON array of adventures. reqwest on desktop, gloo-net on wasm.

use serde::Serialize;

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpSearchClient;
#[cfg(target_arch = "wasm32")]
pub use wasm::HttpSearchClient;

/// Path of the search endpoint, relative to the API base URL
pub const SEARCH_PATH: &str = "/api/adventures/search";

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    prompt: &'a str,
}

fn search_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH)
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use async_trait::async_trait;
    use microaventure_domain::Adventure;
    use reqwest::Client;

    use super::{search_url, SearchRequest};
    use crate::ports::outbound::{AdventureSearchPort, ApiError};

    pub(super) fn client_builder(timeout: Duration) -> reqwest::ClientBuilder {
        Client::builder().timeout(timeout)
    }

    /// Search client backed by reqwest
    #[derive(Clone)]
    pub struct HttpSearchClient {
        client: Client,
        url: String,
    }

    impl HttpSearchClient {
        /// # Errors
        ///
        /// `ApiError::RequestFailed` if the TLS backend cannot be initialised.
        pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
            let client = client_builder(timeout)
                .build()
                .map_err(|e| ApiError::RequestFailed(format!("failed to build HTTP client: {e}")))?;

            Ok(Self::with_client(client, base_url))
        }

        /// Use a preconfigured reqwest client (proxy or TLS settings).
        pub fn with_client(client: Client, base_url: &str) -> Self {
            Self {
                client,
                url: search_url(base_url),
            }
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    #[async_trait]
    impl AdventureSearchPort for HttpSearchClient {
        async fn search(&self, prompt: &str) -> Result<Vec<Adventure>, ApiError> {
            let response = self
                .client
                .post(&self.url)
                .json(&SearchRequest { prompt })
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
                return Err(ApiError::HttpStatus {
                    status: status.as_u16(),
                    body,
                });
            }

            response
                .json::<Vec<Adventure>>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use async_trait::async_trait;
    use gloo_net::http::Request;
    use microaventure_domain::Adventure;

    use super::{search_url, SearchRequest};
    use crate::ports::outbound::{AdventureSearchPort, ApiError};

    /// Search client backed by the browser fetch API
    #[derive(Clone)]
    pub struct HttpSearchClient {
        url: String,
    }

    impl HttpSearchClient {
        /// The browser owns request timeouts; `_timeout` is accepted for parity.
        pub fn new(base_url: &str, _timeout: std::time::Duration) -> Result<Self, ApiError> {
            Ok(Self {
                url: search_url(base_url),
            })
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    #[async_trait(?Send)]
    impl AdventureSearchPort for HttpSearchClient {
        async fn search(&self, prompt: &str) -> Result<Vec<Adventure>, ApiError> {
            let request = Request::post(&self.url)
                .json(&SearchRequest { prompt })
                .map_err(|e| ApiError::SerializeError(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            if !response.ok() {
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::HttpStatus {
                    status: response.status(),
                    body,
                });
            }

            response
                .json::<Vec<Adventure>>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::ports::outbound::{AdventureSearchPort, ApiError};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn joins_base_url_and_path() {
        assert_eq!(
            search_url("http://localhost:8000/"),
            "http://localhost:8000/api/adventures/search"
        );
        assert_eq!(
            search_url("https://api.example.org"),
            "https://api.example.org/api/adventures/search"
        );
    }

    #[test]
    fn request_body_carries_prompt() {
        let body = serde_json::to_value(SearchRequest { prompt: "lac" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "lac" }));
    }

    fn test_client(base: &str) -> HttpSearchClient {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpSearchClient::with_client(client, base)
    }

    #[test]
    fn client_targets_search_endpoint() {
        let client =
            HttpSearchClient::new("http://localhost:8000", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url(), "http://localhost:8000/api/adventures/search");
    }

    /// Serve one canned HTTP response, returning the raw request text.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (base, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn posts_prompt_and_parses_adventures() {
        let body = r#"[{"id":1,"title":"Circuit du Lac","description":"Autour du lac","latitude":45.8492,"longitude":6.1725,"difficulty":"Facile","duration":"1-2h","distance":4.2,"images":[]}]"#;
        let (base, server) = serve_once("HTTP/1.1 200 OK", body).await;

        let client = test_client(&base);
        let adventures = client.search("lac").await.unwrap();

        assert_eq!(adventures.len(), 1);
        assert_eq!(adventures[0].id().as_str(), "1");
        assert_eq!(adventures[0].title(), "Circuit du Lac");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/adventures/search HTTP/1.1"));
        assert!(request.contains(r#"{"prompt":"lac"}"#));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let (base, server) =
            serve_once("HTTP/1.1 503 Service Unavailable", r#"{"error":"down"}"#).await;

        let client = test_client(&base);
        let err = client.search("lac").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::HttpStatus {
                status: 503,
                body: r#"{"error":"down"}"#.to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"not":"a list"}"#).await;

        let client = test_client(&base);
        let err = client.search("lac").await.unwrap_err();

        assert!(matches!(err, ApiError::ParseError(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = test_client(&base);
        let err = client.search("lac").await.unwrap_err();

        assert!(matches!(err, ApiError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn configured_timeout_cuts_off_silent_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let client = native::client_builder(Duration::from_millis(200))
            .no_proxy()
            .build()
            .unwrap();
        let client = HttpSearchClient::with_client(client, &base);

        let result = tokio::time::timeout(Duration::from_secs(5), client.search("lac")).await;

        assert!(matches!(result, Ok(Err(ApiError::RequestFailed(_)))));
        server.abort();
    }
}
