use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

// =============================================================================
// Defaults
// =============================================================================

/// Default address the HTTP server binds to
pub const DEFAULT_BIND: &str = "0.0.0.0:9333";

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Timeout for fetch operations in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "version-exporter")]
#[command(
    version,
    about = "Prometheus exporter reporting whether a newer stable GitHub release exists"
)]
pub struct Cli {
    /// Address to bind the server to
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Show debug logs
    #[arg(long)]
    pub debug: bool,

    /// Token used to authenticate against the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, default_value = DEFAULT_GITHUB_API_URL)]
    pub github_api_url: String,

    /// Timeout for requests to the GitHub API, in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_secs: u64,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> ExporterConfig {
        ExporterConfig {
            bind: self.bind,
            github: GitHubConfig {
                api_url: self.github_api_url,
                token: self
                    .github_token
                    .filter(|token| !token.is_empty())
                    .map(GitHubToken::new),
                timeout: Duration::from_secs(self.fetch_timeout_secs),
            },
            log: LogConfig {
                debug: self.debug,
                format: self.log_format,
                file: self.log_file,
            },
        }
    }
}

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ExporterConfig {
    pub bind: String,
    pub github: GitHubConfig,
    pub log: LogConfig,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            github: GitHubConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Settings for talking to the GitHub API
#[derive(Debug, Clone, PartialEq)]
pub struct GitHubConfig {
    pub api_url: String,
    pub token: Option<GitHubToken>,
    pub timeout: Duration,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

/// Bearer credential for the GitHub API. Redacted in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken(***)")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogConfig {
    pub debug: bool,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn parse(args: &[&str]) -> ExporterConfig {
        Cli::try_parse_from(std::iter::once("version-exporter").chain(args.iter().copied()))
            .unwrap()
            .into_config()
    }

    #[test]
    #[serial]
    fn cli_without_arguments_uses_defaults() {
        // SAFETY: serialized with every other test touching the environment
        unsafe { std::env::remove_var("GITHUB_TOKEN") };

        assert_eq!(parse(&[]), ExporterConfig::default());
    }

    #[test]
    #[serial]
    fn cli_parses_all_flags() {
        unsafe { std::env::remove_var("GITHUB_TOKEN") };

        let config = parse(&[
            "--bind",
            "127.0.0.1:8080",
            "--debug",
            "--github-token",
            "secret",
            "--github-api-url",
            "http://localhost:1234",
            "--fetch-timeout-secs",
            "5",
            "--log-format",
            "json",
            "--log-file",
            "/tmp/exporter.log",
        ]);

        assert_eq!(
            config,
            ExporterConfig {
                bind: "127.0.0.1:8080".to_string(),
                github: GitHubConfig {
                    api_url: "http://localhost:1234".to_string(),
                    token: Some(GitHubToken::new("secret")),
                    timeout: Duration::from_secs(5),
                },
                log: LogConfig {
                    debug: true,
                    format: LogFormat::Json,
                    file: Some(PathBuf::from("/tmp/exporter.log")),
                },
            }
        );
    }

    #[test]
    #[serial]
    fn cli_reads_token_from_environment() {
        unsafe { std::env::set_var("GITHUB_TOKEN", "from-env") };
        let config = parse(&[]);
        unsafe { std::env::remove_var("GITHUB_TOKEN") };

        assert_eq!(config.github.token, Some(GitHubToken::new("from-env")));
    }

    #[test]
    #[serial]
    fn empty_token_is_treated_as_absent() {
        unsafe { std::env::set_var("GITHUB_TOKEN", "") };
        let config = parse(&[]);
        unsafe { std::env::remove_var("GITHUB_TOKEN") };

        assert_eq!(config.github.token, None);
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let config = GitHubConfig {
            token: Some(GitHubToken::new("super-secret")),
            ..Default::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("GitHubToken(***)"));
    }
}
