//! The `then` half of the chain: expectations and extraction.

use serde::de::DeserializeOwned;
use serde_json::Value;
use verbs_domain::request::RequestSpec;
use verbs_domain::response::ResponseSpec;
use verbs_domain::{Assertion, StatusExpectation, TestSuite, ValueMatcher};

use super::log::log_response;
use crate::error::{ScenarioError, ScenarioResult};
use crate::testing::{TestRunner, query_json_path};

/// A received response, ready for expectations.
#[derive(Debug, Clone)]
pub struct ValidatableResponse {
    request: RequestSpec,
    response: ResponseSpec,
}

impl ValidatableResponse {
    pub(crate) const fn new(request: RequestSpec, response: ResponseSpec) -> Self {
        Self { request, response }
    }

    /// Starts declaring expectations.
    #[must_use]
    pub fn then(self) -> ResponseValidator {
        let suite = TestSuite::new(self.request.name.clone());
        ResponseValidator {
            request: self.request,
            response: self.response,
            suite,
            runner: TestRunner::new(),
        }
    }
}

/// Collects expectations and checks them all at once in [`Self::assert`].
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    request: RequestSpec,
    response: ResponseSpec,
    suite: TestSuite,
    runner: TestRunner,
}

impl ResponseValidator {
    /// Logs the full response.
    #[must_use]
    pub fn log_all(self) -> Self {
        log_response(&self.request, &self.response);
        self
    }

    /// Expects an exact status code.
    #[must_use]
    pub fn status_code(self, code: u16) -> Self {
        self.expect(Assertion::status(code))
    }

    /// Expects the status code to satisfy `expected`.
    #[must_use]
    pub fn status(self, expected: StatusExpectation) -> Self {
        self.expect(Assertion::StatusCode { expected })
    }

    /// Expects the JSON value at `path` to satisfy `matcher`.
    #[must_use]
    pub fn body(self, path: impl Into<String>, matcher: ValueMatcher) -> Self {
        self.expect(Assertion::json(path, matcher))
    }

    /// Expects an empty body.
    #[must_use]
    pub fn body_empty(self) -> Self {
        self.expect(Assertion::BodyEmpty)
    }

    /// Expects the `Content-Type` to contain `expected`.
    #[must_use]
    pub fn content_type(self, expected: impl Into<String>) -> Self {
        self.expect(Assertion::ContentType {
            expected: expected.into(),
        })
    }

    /// Expects a header, optionally with an exact value.
    #[must_use]
    pub fn header(self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.expect(Assertion::HeaderExists {
            name: name.into(),
            value: value.map(ToString::to_string),
        })
    }

    /// Adds an arbitrary assertion.
    #[must_use]
    pub fn expect(mut self, assertion: Assertion) -> Self {
        self.suite.add(assertion);
        self
    }

    /// Checks every expectation.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Assertion`] with the full results when any
    /// expectation fails.
    pub fn assert(self) -> ScenarioResult<Extractor> {
        let results = self.runner.run(&self.suite, &self.response);
        if !results.all_passed() {
            tracing::debug!(
                request_id = %self.request.id,
                failed = results.failed,
                total = results.total,
                "expectations failed"
            );
            return Err(ScenarioError::Assertion(Box::new(results)));
        }
        Ok(Extractor {
            response: self.response,
        })
    }
}

/// Access to a response whose expectations held.
#[derive(Debug, Clone)]
pub struct Extractor {
    response: ResponseSpec,
}

impl Extractor {
    /// The raw response.
    #[must_use]
    pub const fn response(&self) -> &ResponseSpec {
        &self.response
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Deserialize`] if the body does not have the
    /// shape of `T`.
    pub fn body_as<T: DeserializeOwned>(&self) -> ScenarioResult<T> {
        serde_json::from_str(&self.response.body).map_err(|e| ScenarioError::Deserialize {
            target: std::any::type_name::<T>(),
            message: e.to_string(),
        })
    }

    /// Returns the JSON value at `path`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Deserialize`] if the body is not JSON or the
    /// path is malformed.
    pub fn path(&self, path: &str) -> ScenarioResult<Option<Value>> {
        let json = self
            .response
            .json()
            .map_err(|e| ScenarioError::Deserialize {
                target: "JSON",
                message: e.to_string(),
            })?;
        query_json_path(&json, path).map_err(|message| ScenarioError::Deserialize {
            target: "JSON",
            message,
        })
    }
}
