//! Fetcher trait for retrieving published releases of a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;
use crate::version::types::Release;

/// Trait for fetching the releases of a repository from an upstream host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseFetcher: Send + Sync {
    /// Fetches all published releases of a repository
    ///
    /// # Arguments
    /// * `repo` - The repository identifier (e.g., "prometheus/prometheus")
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - Releases in upstream order, newest first by convention
    /// * `Err(FetchError)` - If the request or decoding fails
    async fn fetch_releases(&self, repo: &str) -> Result<Vec<Release>, FetchError>;
}
