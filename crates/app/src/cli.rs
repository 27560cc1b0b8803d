//! Command-line arguments.

use clap::Parser;

use crate::config::SuiteConfig;

/// Runs the users API scenario catalogue.
#[derive(Debug, Parser)]
#[command(name = "verbs", version, about, long_about = None)]
pub struct Cli {
    /// Run only scenarios whose name contains FILTER
    pub filter: Option<String>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub config: SuiteConfig,
}
