//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the runner.

use std::time::{Duration, Instant};

use reqwest::{Client, Method};
use url::Url;
use verbs_application::ports::{HttpClient, HttpClientError, HttpFuture};
use verbs_domain::{
    request::{Header, Headers, HttpMethod, RequestBody, RequestSpec},
    response::ResponseSpec,
};

const MAX_REDIRECTS: usize = 10;
const USER_AGENT: &str = concat!("verbs/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from the
/// application layer.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "verbs/<version>"
    ///
    /// Timeouts are applied per request from `RequestSpec::timeout_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Attaches the body, rejecting malformed JSON before it leaves the process.
    fn build_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
        content_type: Option<&str>,
    ) -> Result<reqwest::RequestBuilder, HttpClientError> {
        if body.is_empty() {
            return Ok(builder);
        }

        if content_type.is_some_and(|ct| ct.contains("application/json")) {
            let _: serde_json::Value = serde_json::from_str(&body.content)
                .map_err(|e| HttpClientError::InvalidBody(format!("Invalid JSON: {e}")))?;
        }
        Ok(builder.body(body.content.clone()))
    }

    fn host_of(error: &reqwest::Error) -> String {
        error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string()
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError {
                    host: Self::host_of(error),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: Self::host_of(error),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            if lower.contains("certificate") || lower.contains("tls") {
                return HttpClientError::TlsError(message);
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(error_chain(error))
    }
}

/// Joins an error with its sources; reqwest keeps the useful detail there.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        // Clone what we need to move into the async block
        let method = request.method;
        let url = request.url.clone();
        let headers = request.headers.clone();
        let body = request.body.clone();
        let content_type = request.content_type().map(ToString::to_string);
        let timeout_ms = request.timeout_ms;

        Box::pin(async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url)
                .timeout(Duration::from_millis(timeout_ms));

            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }

            // Content-Type from the body only when no explicit header was set
            if !headers.contains("content-type") {
                if let Some(content_type) = body.content_type() {
                    builder = builder.header("Content-Type", content_type);
                }
            }

            builder = Self::build_body(builder, &body, content_type.as_deref())?;

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            tracing::debug!(%method, %url, status, "response received");

            let response_headers: Headers = response
                .headers()
                .iter()
                .map(|(k, v)| Header::new(k.as_str(), v.to_str().unwrap_or("<binary>")))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?
                .to_vec();

            let duration = start.elapsed();

            Ok(ResponseSpec::new(status, response_headers, body_bytes, duration))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Put),
            Method::PUT
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_json_body() {
        let body = RequestBody::json("{invalid json}");
        let client = Client::new();
        let builder = client.post("https://example.com");
        let result = ReqwestHttpClient::build_body(builder, &body, body.content_type());
        assert!(matches!(result, Err(HttpClientError::InvalidBody(_))));
    }

    #[test]
    fn test_valid_json_body() {
        let body = RequestBody::json(r#"{ "name" : "Lucas", "age" : 19 }"#);
        let client = Client::new();
        let builder = client.post("https://example.com");
        let result = ReqwestHttpClient::build_body(builder, &body, body.content_type());
        assert!(result.is_ok());
    }

    #[test]
    fn test_raw_text_is_not_validated() {
        let body = RequestBody::raw("text/plain", "{not json");
        let client = Client::new();
        let builder = client.post("https://example.com");
        let result = ReqwestHttpClient::build_body(builder, &body, body.content_type());
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let Ok(client) = ReqwestHttpClient::new() else {
            return;
        };
        let result = client.execute(&RequestSpec::new(HttpMethod::Delete, "http://")).await;
        assert!(matches!(result, Err(HttpClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let Ok(client) = ReqwestHttpClient::new() else {
            return;
        };
        // Port 9 (discard) is closed on loopback in test environments.
        let result = client
            .execute(&RequestSpec::new(HttpMethod::Delete, "http://127.0.0.1:9/users/1"))
            .await;
        assert!(matches!(
            result,
            Err(HttpClientError::ConnectionRefused { .. } | HttpClientError::ConnectionFailed(_))
        ));
    }
}
