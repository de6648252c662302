//! Prometheus exporter reporting whether a GitHub repository has a newer
//! stable release than the version currently deployed.
//!
//! - [`version`]: release fetching and stable-version comparison
//! - [`server`]: HTTP endpoints and metrics exposition
//! - [`config`]: command line and runtime configuration
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod server;
pub mod version;
