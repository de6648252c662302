use chrono::{DateTime, Utc};
use semver::Version;
use serde::Deserialize;

/// A release as reported by the GitHub Releases API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Release {
    /// Neither a draft nor flagged as prerelease by the host.
    ///
    /// The tag itself may still carry a prerelease component.
    pub fn is_published_stable(&self) -> bool {
        !self.draft && !self.prerelease
    }
}

/// Result of comparing the deployed version against upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Version supplied by the caller
    pub current: Version,
    /// Latest stable upstream version, if the repository has one
    pub latest: Option<Version>,
}

impl ProbeOutcome {
    /// Whether no strictly newer stable release exists.
    ///
    /// Repositories without any stable release count as up to date.
    pub fn is_up_to_date(&self) -> bool {
        match &self.latest {
            Some(latest) => !crate::version::semver::is_newer(latest, &self.current),
            None => true,
        }
    }

    /// Gauge value exposed as `up_to_date`
    pub fn gauge_value(&self) -> f64 {
        if self.is_up_to_date() { 1.0 } else { 0.0 }
    }
}
