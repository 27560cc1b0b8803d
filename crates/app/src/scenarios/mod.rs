//! The scenario catalogue.
//!
//! Every scenario sends exactly one request and checks the response. A
//! failing scenario never stops the ones after it.

pub mod users;

use std::fmt;
use std::time::Instant;

use verbs_application::ScenarioResult;
use verbs_application::dsl::Api;
use verbs_application::ports::HttpClient;

use crate::report::{RunReport, ScenarioOutcome};

/// A named scenario from the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserScenario {
    /// Create a user and check the status.
    SaveUser,
    /// Create a user and check the echoed fields.
    SaveUserAndValidateFields,
    /// Creating a user without a name is rejected.
    SaveUserWithoutNameFails,
    /// Update user 1.
    UpdateUser,
    /// Update user 1 through a positional path template.
    UpdateUserWithDynamicUrl,
    /// Update user 1 through named path parameters.
    UpdateUserWithPathParams,
    /// Create a user from key/value pairs.
    SaveUserFromMap,
    /// Create a user from a serialized object.
    SaveUserFromObject,
    /// Create a user and read the response back as a `User`.
    SaveUserDeserialized,
    /// Delete user 1.
    DeleteUser,
    /// Deleting a missing user is rejected.
    DeleteMissingUserFails,
}

impl UserScenario {
    /// Every scenario, in run order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SaveUser,
            Self::SaveUserAndValidateFields,
            Self::SaveUserWithoutNameFails,
            Self::UpdateUser,
            Self::UpdateUserWithDynamicUrl,
            Self::UpdateUserWithPathParams,
            Self::SaveUserFromMap,
            Self::SaveUserFromObject,
            Self::SaveUserDeserialized,
            Self::DeleteUser,
            Self::DeleteMissingUserFails,
        ]
    }

    /// Scenarios whose name contains `filter`; all of them when `None`.
    #[must_use]
    pub fn matching(filter: Option<&str>) -> Vec<Self> {
        Self::all()
            .iter()
            .copied()
            .filter(|s| filter.is_none_or(|f| s.name().contains(f)))
            .collect()
    }

    /// Snake-case name, used in logs, reports and filters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SaveUser => "save_user",
            Self::SaveUserAndValidateFields => "save_user_and_validate_fields",
            Self::SaveUserWithoutNameFails => "save_user_without_name_fails",
            Self::UpdateUser => "update_user",
            Self::UpdateUserWithDynamicUrl => "update_user_with_dynamic_url",
            Self::UpdateUserWithPathParams => "update_user_with_path_params",
            Self::SaveUserFromMap => "save_user_from_map",
            Self::SaveUserFromObject => "save_user_from_object",
            Self::SaveUserDeserialized => "save_user_deserialized",
            Self::DeleteUser => "delete_user",
            Self::DeleteMissingUserFails => "delete_missing_user_fails",
        }
    }

    /// Runs the scenario once against `api`.
    ///
    /// # Errors
    ///
    /// Returns the first error of the chain: request building, transport,
    /// the collected assertion failures, or body deserialization.
    pub async fn run<C: HttpClient>(self, api: &Api<C>) -> ScenarioResult<()> {
        match self {
            Self::SaveUser => users::save_user(api).await,
            Self::SaveUserAndValidateFields => users::save_user_and_validate_fields(api).await,
            Self::SaveUserWithoutNameFails => users::save_user_without_name_fails(api).await,
            Self::UpdateUser => users::update_user(api).await,
            Self::UpdateUserWithDynamicUrl => users::update_user_with_dynamic_url(api).await,
            Self::UpdateUserWithPathParams => users::update_user_with_path_params(api).await,
            Self::SaveUserFromMap => users::save_user_from_map(api).await,
            Self::SaveUserFromObject => users::save_user_from_object(api).await,
            Self::SaveUserDeserialized => users::save_user_deserialized(api).await,
            Self::DeleteUser => users::delete_user(api).await,
            Self::DeleteMissingUserFails => users::delete_missing_user_fails(api).await,
        }
    }
}

impl fmt::Display for UserScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs `scenarios` one after another and collects their outcomes.
pub async fn run_scenarios<C: HttpClient>(api: &Api<C>, scenarios: &[UserScenario]) -> RunReport {
    let mut report = RunReport::new(api.base_url());

    for &scenario in scenarios {
        tracing::info!(scenario = scenario.name(), "running scenario");
        let start = Instant::now();
        let result = scenario.run(api).await;
        let elapsed = start.elapsed();
        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(()) => tracing::info!(
                scenario = scenario.name(),
                duration_ms,
                "scenario passed"
            ),
            Err(e) => tracing::error!(
                scenario = scenario.name(),
                duration_ms,
                "scenario failed: {e}"
            ),
        }

        report.record(ScenarioOutcome::from_result(scenario.name(), &result, duration_ms));
    }

    report.finish();
    report
}
