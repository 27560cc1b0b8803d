//! Expectations on values extracted from a response.

use std::time::Duration;

use serde::Serialize;
use verbs_domain::request::Headers;
use verbs_domain::response::ResponseSpec;
use verbs_domain::{Assertion, TestSuite, ValueMatcher};

use crate::error::{ScenarioError, ScenarioResult};
use crate::testing::TestRunner;

/// Starts checking fields of `value`, using the same matchers as
/// [`ResponseValidator::body`](super::ResponseValidator::body).
///
/// # Errors
///
/// Returns [`ScenarioError::Deserialize`] if `value` cannot be represented
/// as JSON.
pub fn verify<T: Serialize + ?Sized>(label: &str, value: &T) -> ScenarioResult<ObjectValidator> {
    let body = serde_json::to_vec(value).map_err(|e| ScenarioError::Deserialize {
        target: std::any::type_name::<T>(),
        message: e.to_string(),
    })?;
    Ok(ObjectValidator {
        value: ResponseSpec::new(200, Headers::new(), body, Duration::ZERO),
        suite: TestSuite::new(label),
    })
}

/// Collects field expectations on an extracted value.
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    value: ResponseSpec,
    suite: TestSuite,
}

impl ObjectValidator {
    /// Expects the field at `path` to satisfy `matcher`.
    #[must_use]
    pub fn field(mut self, path: impl Into<String>, matcher: ValueMatcher) -> Self {
        self.suite.add(Assertion::json(path, matcher));
        self
    }

    /// Checks every expectation.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Assertion`] when any field does not match.
    pub fn assert(self) -> ScenarioResult<()> {
        let results = TestRunner::new().run(&self.suite, &self.value);
        if results.all_passed() {
            Ok(())
        } else {
            Err(ScenarioError::Assertion(Box::new(results)))
        }
    }
}
