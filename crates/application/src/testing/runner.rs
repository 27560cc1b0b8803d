//! Test runner implementation.
//!
//! Executes assertions against HTTP responses and produces test results.

use std::time::Instant;

use serde_json::Value;
use verbs_domain::response::ResponseSpec;
use verbs_domain::testing::{
    Assertion, AssertionResult, StatusExpectation, TestResults, TestSuite, ValueMatcher,
};

use super::json_path;

const PREVIEW_LEN: usize = 100;

/// Test runner that executes assertions against responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestRunner {
    /// Whether to stop on first failure.
    stop_on_failure: bool,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stop_on_failure: false,
        }
    }

    /// Set whether to stop on first failure.
    #[must_use]
    pub const fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Run a test suite against a response.
    #[must_use]
    pub fn run(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        let start = Instant::now();
        let mut results = Vec::with_capacity(suite.assertions.len());
        // Parsed once and shared by every JSON assertion.
        let json = response.json();

        for assertion in &suite.assertions {
            let result = self.evaluate(assertion, response, json.as_ref().ok());
            let failed = !result.passed;
            tracing::trace!(suite = %suite.name, result = %result, "assertion evaluated");
            results.push(result);

            if failed && (self.stop_on_failure || suite.stop_on_failure) {
                break;
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;
        TestResults::new(&suite.name, results, duration_ms)
    }

    fn evaluate(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        json: Option<&Value>,
    ) -> AssertionResult {
        match assertion {
            Assertion::StatusCode { expected } => {
                self.check_status_code(assertion, response, expected)
            }
            Assertion::JsonPath { path, matcher } => {
                self.check_json_path(assertion, response, json, path, matcher)
            }
            Assertion::BodyEmpty => self.check_body_empty(assertion, response),
            Assertion::IsJson => self.check_is_json(assertion, response),
            Assertion::ContentType { expected } => {
                self.check_content_type(assertion, response, expected)
            }
            Assertion::HeaderExists { name, value } => {
                self.check_header_exists(assertion, response, name, value.as_deref())
            }
        }
    }

    fn check_status_code(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        expected: &StatusExpectation,
    ) -> AssertionResult {
        let actual = response.status;
        if expected.matches(actual) {
            AssertionResult::pass_with_value(assertion.clone(), actual.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                actual.to_string(),
                format!("Expected status {}, got {}", expected.description(), actual),
            )
        }
    }

    fn check_json_path(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        json: Option<&Value>,
        path: &str,
        matcher: &ValueMatcher,
    ) -> AssertionResult {
        let Some(json) = json else {
            return AssertionResult::fail_with_value(
                assertion.clone(),
                preview(&response.body),
                "Failed to parse body as JSON",
            );
        };

        match json_path::query(json, path) {
            Ok(found) => {
                let actual = found
                    .as_ref()
                    .map_or_else(|| "<absent>".to_string(), ToString::to_string);
                if matcher.matches(found.as_ref()) {
                    AssertionResult::pass_with_value(assertion.clone(), actual)
                } else {
                    AssertionResult::fail_with_value(
                        assertion.clone(),
                        actual.clone(),
                        format!("Expected JSON '{path}' {matcher}, got {actual}"),
                    )
                }
            }
            Err(e) => AssertionResult::fail(
                assertion.clone(),
                format!("Invalid JSON path '{path}': {e}"),
            ),
        }
    }

    fn check_body_empty(&self, assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        if response.is_body_empty() {
            AssertionResult::pass(assertion.clone())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                preview(&response.body),
                format!("Expected empty body, got {} bytes", response.size),
            )
        }
    }

    fn check_is_json(&self, assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        match response.json() {
            Ok(_) => AssertionResult::pass(assertion.clone()),
            Err(e) => AssertionResult::fail(
                assertion.clone(),
                format!("Body is not valid JSON: {e}"),
            ),
        }
    }

    fn check_content_type(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        expected: &str,
    ) -> AssertionResult {
        match &response.content_type {
            Some(actual) if actual.contains(expected) => {
                AssertionResult::pass_with_value(assertion.clone(), actual.clone())
            }
            Some(actual) => AssertionResult::fail_with_value(
                assertion.clone(),
                actual.clone(),
                format!("Content-Type '{actual}' does not contain '{expected}'"),
            ),
            None => AssertionResult::fail(assertion.clone(), "No Content-Type header present"),
        }
    }

    fn check_header_exists(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        name: &str,
        expected_value: Option<&str>,
    ) -> AssertionResult {
        match (response.get_header(name), expected_value) {
            (Some(actual), Some(expected)) if actual != expected => {
                AssertionResult::fail_with_value(
                    assertion.clone(),
                    actual,
                    format!("Header '{name}' value mismatch: expected '{expected}', got '{actual}'"),
                )
            }
            (Some(actual), _) => AssertionResult::pass_with_value(assertion.clone(), actual),
            (None, _) => AssertionResult::fail(assertion.clone(), format!("Header '{name}' not found")),
        }
    }
}

/// Truncates a body for display without splitting a character.
fn preview(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_LEN) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
