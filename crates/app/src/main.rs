//! Verbs binary: runs the scenario catalogue and exits non-zero on failure.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use verbs::{Cli, UserScenario, run_scenarios};
use verbs_application::dsl::Api;
use verbs_infrastructure::{ReqwestHttpClient, init_tracing, to_json_stable};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config;

    tracing::info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout_ms,
        "Starting verbs v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = Arc::new(ReqwestHttpClient::new()?);
    let api = Api::new(client, config.base_url).with_timeout_ms(config.timeout_ms);

    let selected = UserScenario::matching(cli.filter.as_deref());
    if selected.is_empty() {
        tracing::warn!(filter = ?cli.filter, "no scenario matches the filter");
    }

    let report = run_scenarios(&api, &selected).await;

    if cli.json {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(to_json_stable(&report)?.as_bytes())?;
        stdout.flush()?;
    }

    for outcome in report.failures() {
        tracing::error!(scenario = %outcome.name, "FAILED");
    }

    if report.all_passed() {
        tracing::info!("{}", report.summary());
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!("{}", report.summary());
        Ok(ExitCode::FAILURE)
    }
}
