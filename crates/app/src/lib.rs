//! Verbs - end-to-end checks of the users REST API.
//!
//! The catalogue in [`scenarios`] exercises POST, PUT and DELETE against
//! `/users` through the fluent chain in `verbs_application::dsl`. The
//! `verbs` binary runs it against the host in [`SuiteConfig`].

pub mod cli;
pub mod config;
pub mod report;
pub mod scenarios;

pub use cli::Cli;
pub use config::{ConfigError, SuiteConfig};
pub use report::{RunReport, ScenarioOutcome};
pub use scenarios::{UserScenario, run_scenarios};
