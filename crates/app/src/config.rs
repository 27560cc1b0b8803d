//! Runtime configuration: flags, falling back to environment variables.

use clap::{Args, Parser};
use thiserror::Error;
use url::Url;
use verbs_domain::request::DEFAULT_TIMEOUT_MS;

/// Host the scenarios run against when `VERBS_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://restapi.wcaquino.me";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "VERBS_BASE_URL";

/// Environment variable overriding the per-request timeout.
pub const TIMEOUT_VAR: &str = "VERBS_TIMEOUT_MS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{0}': expected an absolute http or https URL")]
    InvalidBaseUrl(String),

    /// An environment variable holds a value clap rejected.
    #[error(transparent)]
    Environment(#[from] clap::Error),
}

/// Where and how the scenarios run.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct SuiteConfig {
    /// Base URL every scenario path is resolved against
    #[arg(long, env = BASE_URL_VAR, default_value = DEFAULT_BASE_URL, value_parser = parse_base_url)]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[arg(
        long,
        env = TIMEOUT_VAR,
        default_value_t = DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,
}

/// Reads only the environment; no flags are accepted.
#[derive(Debug, Parser)]
#[command(name = "verbs")]
struct EnvOnly {
    #[command(flatten)]
    config: SuiteConfig,
}

impl SuiteConfig {
    /// Reads `VERBS_BASE_URL` and `VERBS_TIMEOUT_MS`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Environment`] if a variable is set to an
    /// invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(EnvOnly::try_parse_from(["verbs"])?.config)
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let base_url = raw.trim();
    match Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(base_url.to_string())
        }
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<SuiteConfig, clap::Error> {
        EnvOnly::try_parse_from(std::iter::once("verbs").chain(args.iter().copied()))
            .map(|parsed| parsed.config)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).ok();
        assert_eq!(
            config,
            Some(SuiteConfig {
                base_url: "https://restapi.wcaquino.me".to_string(),
                timeout_ms: 30_000,
            })
        );
    }

    #[test]
    fn test_overrides() {
        let config = parse(&["--base-url", " http://127.0.0.1:8080 ", "--timeout-ms", "500"]);

        assert_eq!(
            config.ok(),
            Some(SuiteConfig {
                base_url: "http://127.0.0.1:8080".to_string(),
                timeout_ms: 500,
            })
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let error = parse(&["--base-url", "restapi.wcaquino.me"]).err();
        assert_eq!(error.map(|e| e.kind()), Some(ErrorKind::ValueValidation));

        assert!(matches!(
            parse_base_url("ftp://restapi.wcaquino.me"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["abc", "0", "-5"] {
            let error = parse(&["--timeout-ms", raw]).err();
            assert!(error.is_some(), "{raw} accepted");
        }
    }
}
