//! Fetcher test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use version_exporter::version::error::FetchError;
use version_exporter::version::fetcher::ReleaseFetcher;
use version_exporter::version::types::Release;

/// Stub fetcher serving canned release lists
#[derive(Default)]
pub struct StubFetcher {
    releases: HashMap<String, Vec<Release>>,
    calls: Arc<AtomicUsize>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register releases for a repository as `(tag, draft, prerelease)` tuples
    pub fn with_releases(mut self, repo: &str, releases: &[(&str, bool, bool)]) -> Self {
        self.releases.insert(
            repo.to_string(),
            releases
                .iter()
                .map(|(tag, draft, prerelease)| Release {
                    tag_name: tag.to_string(),
                    draft: *draft,
                    prerelease: *prerelease,
                    published_at: None,
                })
                .collect(),
        );
        self
    }

    /// Handle to the number of fetches performed
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl ReleaseFetcher for StubFetcher {
    async fn fetch_releases(&self, repo: &str) -> Result<Vec<Release>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.releases.get(repo) {
            Some(releases) => Ok(releases.clone()),
            None => Err(FetchError::NotFound(repo.to_string())),
        }
    }
}
