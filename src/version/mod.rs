//! Release fetching and version comparison
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│   Checker   │────▶│   Outcome   │
//! │  (GitHub)   │     │ (latest &   │     │ (up to date │
//! └─────────────┘     │  compare)   │     │  gauge)     │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`fetcher`]: Fetcher trait for retrieving releases from a host
//! - [`github`]: GitHub Releases API implementation
//! - [`checker`]: Latest stable release selection and comparison
//! - [`semver`]: Tolerant tag parsing and precedence helpers
//! - [`types`]: `Release` and `ProbeOutcome`
//! - [`error`]: Error types for fetching and probing

pub mod checker;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod semver;
pub mod types;
