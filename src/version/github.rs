//! GitHub Releases API fetcher

use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::{GitHubConfig, GitHubToken};
use crate::version::error::FetchError;
use crate::version::fetcher::ReleaseFetcher;
use crate::version::types::Release;

const USER_AGENT: &str = concat!("version-exporter/", env!("CARGO_PKG_VERSION"));

/// Fetcher implementation for the GitHub Releases API
pub struct GitHubFetcher {
    client: Client,
    base_url: String,
    token: Option<GitHubToken>,
}

impl GitHubFetcher {
    /// Creates a new GitHubFetcher from the configured API URL, token and timeout
    pub fn new(config: &GitHubConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ReleaseFetcher for GitHubFetcher {
    async fn fetch_releases(&self, repo: &str) -> Result<Vec<Release>, FetchError> {
        let url = format!("{}/repos/{}/releases", self.base_url, repo);
        debug!("Fetching releases from {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(repo.to_string()));
        }

        if is_rate_limited(status, response.headers()) {
            return Err(FetchError::RateLimited {
                retry_after_secs: retry_after_secs(response.headers()),
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse GitHub releases response for {}: {}", repo, e);
            FetchError::Decode(e)
        })
    }
}

/// GitHub signals an exhausted quota with 429, or with 403 and a zero remaining count
fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN
            && header_value(headers, "x-ratelimit-remaining") == Some(0))
}

fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    header_value(headers, "retry-after").or_else(|| {
        let reset = header_value(headers, "x-ratelimit-reset")?;
        let now = u64::try_from(chrono::Utc::now().timestamp()).ok()?;
        Some(reset.saturating_sub(now))
    })
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
