//! Application error types

use std::fmt::Write as _;

use thiserror::Error;
use verbs_domain::{DomainError, TestResults};

use crate::execute_request::ExecuteRequestError;

/// Ways a single scenario can fail. Each aborts only its own scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The request could not be built (body encoding, path parameters).
    #[error("could not build request: {0}")]
    Request(#[from] DomainError),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] ExecuteRequestError),

    /// The response did not meet one or more expectations.
    #[error("{}", describe_failures(.0))]
    Assertion(Box<TestResults>),

    /// The response body did not have the expected shape.
    #[error("could not deserialize response body into {target}: {message}")]
    Deserialize {
        /// Name of the target type.
        target: &'static str,
        /// Parser message.
        message: String,
    },
}

impl ScenarioError {
    /// Returns the assertion results when this is an assertion failure.
    #[must_use]
    pub fn test_results(&self) -> Option<&TestResults> {
        match self {
            Self::Assertion(results) => Some(&**results),
            _ => None,
        }
    }
}

fn describe_failures(results: &TestResults) -> String {
    let mut message = format!(
        "{} of {} assertions failed for {}",
        results.failed, results.total, results.suite_name
    );
    for failure in results.failures() {
        let _ = write!(message, "\n  {failure}");
        if let Some(actual) = &failure.actual {
            let _ = write!(message, " (actual: {actual})");
        }
    }
    message
}

/// Result type alias for scenario steps.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
