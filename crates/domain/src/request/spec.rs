//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::{Headers, HttpMethod, RequestBody};
use crate::error::{DomainError, DomainResult};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// A fully resolved request, ready to hand to an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Unique identifier, used to correlate request and response logs
    pub id: Uuid,
    /// `"<METHOD> <url>"`, used as the name of the expectation suite
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// HTTP headers
    #[serde(default)]
    pub headers: Headers,
    /// Request body
    #[serde(default)]
    pub body: RequestBody,
    /// Timeout for the whole exchange
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl RequestSpec {
    /// Creates a bodiless request with no headers and the default timeout.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            id: Uuid::now_v7(),
            name: format!("{method} {url}"),
            method,
            url,
            headers: Headers::new(),
            body: RequestBody::none(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Parses the URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL is malformed.
    pub fn parse_url(&self) -> DomainResult<Url> {
        Url::parse(&self.url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))
    }

    /// Returns the effective content type: an explicit header wins over the body's.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .or_else(|| self.body.content_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_request() {
        let req = RequestSpec::new(HttpMethod::Delete, "https://restapi.wcaquino.me/users/1");
        assert_eq!(req.name, "DELETE https://restapi.wcaquino.me/users/1");
        assert_eq!(req.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(req.content_type(), None);
    }

    #[test]
    fn test_body_content_type() {
        let mut req = RequestSpec::new(HttpMethod::Post, "https://restapi.wcaquino.me/users");
        req.body = RequestBody::json(r#"{"age": 19}"#);
        assert_eq!(req.content_type(), Some("application/json"));
    }

    #[test]
    fn test_header_content_type_wins() {
        let mut req = RequestSpec::new(HttpMethod::Post, "https://example.com");
        req.body = RequestBody::json("{}");
        req.headers.set("Content-Type", "application/vnd.api+json");
        assert_eq!(req.content_type(), Some("application/vnd.api+json"));
    }

    #[test]
    fn test_parse_url() {
        let ok = RequestSpec::new(HttpMethod::Delete, "https://example.com/users/1");
        assert!(ok.parse_url().is_ok());

        let bad = RequestSpec::new(HttpMethod::Delete, "not a url");
        assert!(matches!(bad.parse_url(), Err(DomainError::InvalidUrl(_))));
    }
}
