//! Target API handle: a client plus the base URL paths are resolved against.

use std::sync::Arc;

use verbs_domain::request::DEFAULT_TIMEOUT_MS;

use crate::execute_request::ExecuteRequest;
use crate::ports::HttpClient;

/// A remote API reachable through an [`HttpClient`].
pub struct Api<C: HttpClient> {
    executor: ExecuteRequest<C>,
    base_url: String,
    timeout_ms: u64,
}

impl<C: HttpClient> Api<C> {
    /// Creates a handle for the API rooted at `base_url`.
    pub fn new(client: Arc<C>, base_url: impl Into<String>) -> Self {
        Self {
            executor: ExecuteRequest::new(client),
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the default timeout for requests built against this API.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default request timeout.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub(crate) const fn executor(&self) -> &ExecuteRequest<C> {
        &self.executor
    }

    /// Joins `path` onto the base URL. Absolute URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}
