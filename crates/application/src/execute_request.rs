//! Execute Request Use Case
//!
//! Validates a request and sends it through the `HttpClient` port.

use std::sync::Arc;

use thiserror::Error;
use verbs_domain::{request::RequestSpec, response::ResponseSpec};

use crate::ports::{HttpClient, HttpClientError};

/// Result type for request execution.
pub type ExecuteResult = Result<ResponseSpec, ExecuteRequestError>;

/// Error type for the execute request use case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecuteRequestError {
    /// URL is empty.
    #[error("URL is required")]
    EmptyUrl,

    /// URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed.
    #[error("{0}")]
    HttpError(#[from] HttpClientError),
}

/// Use case for executing HTTP requests.
///
/// # Example
///
/// ```ignore
/// let use_case = ExecuteRequest::new(Arc::new(ReqwestHttpClient::new()?));
///
/// let request = RequestSpec::new(HttpMethod::Delete, "https://restapi.wcaquino.me/users/999");
/// let response = use_case.execute(&request).await?;
/// ```
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> Clone for ExecuteRequest<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Executes the request and returns the result.
    ///
    /// # Validation
    ///
    /// - URL must not be empty
    /// - URL must start with http:// or https://
    /// - URL must parse
    ///
    /// # Errors
    ///
    /// Returns `ExecuteRequestError` on validation or HTTP failures.
    pub async fn execute(&self, request: &RequestSpec) -> ExecuteResult {
        Self::validate(request)?;

        let response = self.client.execute(request).await.inspect_err(|e| {
            tracing::warn!(request_id = %request.id, error = %e, "request failed");
        })?;

        tracing::debug!(
            request_id = %request.id,
            status = response.status,
            duration_ms = response.duration.as_millis(),
            "request completed"
        );

        Ok(response)
    }

    fn validate(request: &RequestSpec) -> Result<(), ExecuteRequestError> {
        if request.url.trim().is_empty() {
            return Err(ExecuteRequestError::EmptyUrl);
        }

        if !request.url.starts_with("http://") && !request.url.starts_with("https://") {
            return Err(ExecuteRequestError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        request
            .parse_url()
            .map(|_| ())
            .map_err(|e| ExecuteRequestError::InvalidUrl(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::HttpFuture;
    use std::sync::Mutex;
    use std::time::Duration;
    use verbs_domain::request::{Header, Headers, HttpMethod};

    /// Mock HTTP client returning a canned result and recording requests.
    pub(crate) struct MockHttpClient {
        response: Result<ResponseSpec, HttpClientError>,
        pub(crate) requests: Mutex<Vec<RequestSpec>>,
    }

    impl MockHttpClient {
        pub(crate) fn json(status: u16, body: &str) -> Self {
            let headers: Headers =
                std::iter::once(Header::new("Content-Type", "application/json")).collect();
            Self {
                response: Ok(ResponseSpec::new(
                    status,
                    headers,
                    body.as_bytes().to_vec(),
                    Duration::from_millis(50),
                )),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn error(err: HttpClientError) -> Self {
            Self {
                response: Err(err),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn last_request(&self) -> Option<RequestSpec> {
            self.requests.lock().ok().and_then(|r| r.last().cloned())
        }
    }

    impl HttpClient for MockHttpClient {
        fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request.clone());
            }
            let result = self.response.clone();
            Box::pin(async move { result })
        }
    }

    #[tokio::test]
    async fn test_execute_success() {
        let client = Arc::new(MockHttpClient::json(200, "{}"));
        let use_case = ExecuteRequest::new(Arc::clone(&client));

        let request = RequestSpec::new(HttpMethod::Get, "https://restapi.wcaquino.me/users");
        let result = use_case.execute(&request).await;

        assert_eq!(result.map(|r| r.status), Ok(200));
        assert_eq!(client.requests.lock().map(|r| r.len()).ok(), Some(1));
    }

    #[tokio::test]
    async fn test_execute_empty_url() {
        let client = Arc::new(MockHttpClient::json(200, "{}"));
        let use_case = ExecuteRequest::new(Arc::clone(&client));

        let request = RequestSpec::new(HttpMethod::Get, "");
        let result = use_case.execute(&request).await;

        assert_eq!(result, Err(ExecuteRequestError::EmptyUrl));
        assert!(client.last_request().is_none());
    }

    #[tokio::test]
    async fn test_execute_invalid_url() {
        let client = Arc::new(MockHttpClient::json(200, "{}"));
        let use_case = ExecuteRequest::new(client);

        let request = RequestSpec::new(HttpMethod::Delete, "restapi.wcaquino.me/users/1");
        let result = use_case.execute(&request).await;

        assert!(matches!(result, Err(ExecuteRequestError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_execute_unparseable_url() {
        let client = Arc::new(MockHttpClient::json(200, "{}"));
        let use_case = ExecuteRequest::new(Arc::clone(&client));

        let result = use_case.execute(&RequestSpec::new(HttpMethod::Delete, "http://")).await;

        assert!(matches!(result, Err(ExecuteRequestError::InvalidUrl(_))));
        assert!(client.last_request().is_none());
    }

    #[tokio::test]
    async fn test_execute_http_error() {
        let client = Arc::new(MockHttpClient::error(HttpClientError::Timeout {
            timeout_ms: 5000,
        }));
        let use_case = ExecuteRequest::new(client);

        let request = RequestSpec::new(HttpMethod::Get, "https://restapi.wcaquino.me/users");
        let result = use_case.execute(&request).await;

        assert_eq!(
            result,
            Err(ExecuteRequestError::HttpError(HttpClientError::Timeout {
                timeout_ms: 5000
            }))
        );
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let client = Arc::new(MockHttpClient::json(400, r#"{"error":"Registro inexistente"}"#));
        let use_case = ExecuteRequest::new(client);

        let request = RequestSpec::new(HttpMethod::Delete, "https://restapi.wcaquino.me/users/999");
        let result = use_case.execute(&request).await;

        assert_eq!(result.map(|r| r.status), Ok(400));
    }
}
