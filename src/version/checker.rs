//! Latest-stable-release selection and comparison against the deployed version

use std::sync::Arc;

use semver::Version;
use tracing::{debug, warn};

use crate::version::error::{FetchError, ProbeError};
use crate::version::fetcher::ReleaseFetcher;
use crate::version::semver::{is_stable, parse_tag};
use crate::version::types::ProbeOutcome;

/// Compares a deployed version against the latest stable release of a repository
#[derive(Clone)]
pub struct VersionChecker {
    fetcher: Arc<dyn ReleaseFetcher>,
}

impl VersionChecker {
    pub fn new(fetcher: Arc<dyn ReleaseFetcher>) -> Self {
        Self { fetcher }
    }

    /// Find the latest stable release of a repository
    ///
    /// Scans releases in upstream order and returns the first one that is
    /// neither a draft nor a prerelease, and whose tag parses as a semver
    /// version without a prerelease component. Tags that fail to parse are
    /// logged and skipped.
    ///
    /// Returns `Ok(None)` when no release qualifies.
    pub async fn find_latest(&self, repo: &str) -> Result<Option<Version>, FetchError> {
        let releases = self.fetcher.fetch_releases(repo).await?;

        for release in releases {
            if !release.is_published_stable() {
                continue;
            }

            let version = match parse_tag(&release.tag_name) {
                Ok(version) => version,
                Err(e) => {
                    warn!(
                        "Failed to parse tag {} of {}: {}",
                        release.tag_name, repo, e
                    );
                    continue;
                }
            };

            if is_stable(&version) {
                return Ok(Some(version));
            }
        }

        Ok(None)
    }

    /// Compare `tag` against the latest stable release of `repo`
    ///
    /// The tag is validated before anything is fetched.
    pub async fn probe(&self, repo: &str, tag: &str) -> Result<ProbeOutcome, ProbeError> {
        if repo.is_empty() {
            return Err(ProbeError::MissingRepo);
        }
        if tag.is_empty() {
            return Err(ProbeError::MissingTag);
        }

        let current = parse_tag(tag)?;
        let latest = self.find_latest(repo).await?;

        let outcome = ProbeOutcome { current, latest };
        debug!(
            repo,
            current = %outcome.current,
            latest = ?outcome.latest.as_ref().map(ToString::to_string),
            up_to_date = outcome.is_up_to_date(),
            "reporting"
        );

        Ok(outcome)
    }
}
