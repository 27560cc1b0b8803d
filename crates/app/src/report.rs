//! Outcome of a catalogue run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use verbs_application::{ScenarioError, ScenarioResult};

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Whether every expectation held.
    pub passed: bool,
    /// Wall time in milliseconds.
    pub duration_ms: u64,
    /// Error message when the scenario failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// One line per failed assertion, when the failure was an assertion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

impl ScenarioOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn passed(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            passed: true,
            duration_ms,
            error: None,
            failures: Vec::new(),
        }
    }

    /// A failing outcome for `error`.
    #[must_use]
    pub fn failed(name: impl Into<String>, error: &ScenarioError, duration_ms: u64) -> Self {
        let failures = error
            .test_results()
            .map(|results| results.failures().map(ToString::to_string).collect())
            .unwrap_or_default();

        Self {
            name: name.into(),
            passed: false,
            duration_ms,
            error: Some(error.to_string()),
            failures,
        }
    }

    /// Builds the outcome from a scenario result.
    #[must_use]
    pub fn from_result(name: &str, result: &ScenarioResult<()>, duration_ms: u64) -> Self {
        match result {
            Ok(()) => Self::passed(name, duration_ms),
            Err(e) => Self::failed(name, e, duration_ms),
        }
    }
}

/// Outcomes of a run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Host the scenarios ran against.
    pub base_url: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the last scenario finished.
    pub finished_at: Option<DateTime<Utc>>,
    /// Number of scenarios run.
    pub total: usize,
    /// Number of passing scenarios.
    pub passed: usize,
    /// Number of failing scenarios.
    pub failed: usize,
    /// Per-scenario outcomes.
    pub scenarios: Vec<ScenarioOutcome>,
}

impl RunReport {
    /// Starts an empty report.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            started_at: Utc::now(),
            finished_at: None,
            total: 0,
            passed: 0,
            failed: 0,
            scenarios: Vec::new(),
        }
    }

    /// Appends an outcome.
    pub fn record(&mut self, outcome: ScenarioOutcome) {
        self.total += 1;
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.scenarios.push(outcome);
    }

    /// Stamps the finish time.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// True when no scenario failed. An empty run passes.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// The failing outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.scenarios.iter().filter(|o| !o.passed)
    }

    /// Human-readable one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} scenarios: {} passed, {} failed",
            self.total, self.passed, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use verbs_domain::{Assertion, AssertionResult, TestResults};
    use verbs_infrastructure::to_json_stable;

    fn assertion_error() -> ScenarioError {
        ScenarioError::Assertion(Box::new(TestResults::new(
            "DELETE https://restapi.wcaquino.me/users/1",
            vec![AssertionResult::fail_with_value(
                Assertion::status(204),
                "400",
                "Expected status = 204, got 400",
            )],
            0,
        )))
    }

    #[test]
    fn test_counts() {
        let mut report = RunReport::new("https://restapi.wcaquino.me");
        report.record(ScenarioOutcome::from_result("save_user", &Ok(()), 12));
        report.record(ScenarioOutcome::from_result(
            "delete_user",
            &Err(assertion_error()),
            8,
        ));
        report.finish();

        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert!(report.finished_at.is_some());
        assert_eq!(report.summary(), "2 scenarios: 1 passed, 1 failed");

        let failed: Vec<&str> = report.failures().map(|o| o.name.as_str()).collect();
        assert_eq!(failed, vec!["delete_user"]);
    }

    #[test]
    fn test_assertion_failures_are_listed() {
        let outcome = ScenarioOutcome::failed("delete_user", &assertion_error(), 3);

        assert!(!outcome.passed);
        assert_eq!(
            outcome.failures,
            vec!["[FAIL] Status code = 204: Expected status = 204, got 400".to_string()]
        );
        assert!(outcome.error.is_some_and(|e| e.starts_with("1 of 1 assertions failed")));
    }

    #[test]
    fn test_empty_run_passes() {
        let report = RunReport::new("http://localhost");
        assert!(report.all_passed());
        assert_eq!(report.summary(), "0 scenarios: 0 passed, 0 failed");
    }

    #[test]
    fn test_json_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let mut report = RunReport::new("https://restapi.wcaquino.me");
        report.record(ScenarioOutcome::passed("save_user", 5));
        report.finish();

        let json = to_json_stable(&report)?;
        assert!(json.contains("\"name\": \"save_user\""));
        assert!(!json.contains("\"error\""));

        let back: RunReport = serde_json::from_str(&json)?;
        assert_eq!(back, report);
        Ok(())
    }
}
