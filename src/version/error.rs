use thiserror::Error;

/// Failure while fetching the release list from upstream
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to get repository releases: {0}")]
    Network(#[from] reqwest::Error),

    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("rate limited by GitHub: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("GitHub responded with status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to parse the response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of a single probe request
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("repo parameter is missing")]
    MissingRepo,

    #[error("tag parameter is missing")]
    MissingTag,

    #[error("{0}")]
    InvalidVersion(#[from] semver::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
