//! HTTP handlers for the exporter endpoints

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, warn};

use super::metrics::{CONTENT_TYPE, ProbeMetrics, render_default_registry};
use crate::version::checker::VersionChecker;
use crate::version::error::ProbeError;

/// Shared application state
pub struct AppState {
    pub checker: VersionChecker,
    pub metrics: ProbeMetrics,
}

impl AppState {
    pub fn new(checker: VersionChecker) -> prometheus::Result<Self> {
        Ok(Self {
            checker,
            metrics: ProbeMetrics::new()?,
        })
    }
}

/// Query parameters of `/probe`
#[derive(Debug, Default, PartialEq)]
pub struct ProbeParams {
    pub repo: Option<String>,
    pub tag: Option<String>,
}

impl ProbeParams {
    /// Collect parameters from raw query pairs, keeping the first value of repeated keys
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "repo" => &mut params.repo,
                "tag" => &mut params.tag,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

const INDEX_HTML: &str = r#"<html>
<head><title>Version Exporter</title></head>
<body>
	<h1>Version Exporter</h1>
	<p><a href="/metrics">Metrics</a></p>
	<p><a href="/probe?repo=prometheus/prometheus&tag=v1.7.2">probe prometheus/prometheus</a></p>
</body>
</html>
"#;

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Process-wide metrics
pub async fn metrics() -> Response {
    exposition(render_default_registry())
}

/// Probe a repository and render the probe gauges
///
/// Every failed probe answers 400 and bumps `probe_error_count`.
pub async fn probe(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let start = Instant::now();

    let result = match query {
        Ok(Query(pairs)) => {
            let params = ProbeParams::from_pairs(pairs);
            let repo = params.repo.unwrap_or_default();
            let tag = params.tag.unwrap_or_default();
            state.checker.probe(&repo, &tag).await.map_err(|e| {
                warn!("Probe of {:?} at {:?} failed: {}", repo, tag, e);
                e.into_response()
            })
        }
        Err(rejection) => {
            warn!("Rejected probe query: {}", rejection);
            Err(rejection.into_response())
        }
    };

    state.metrics.observe_duration(start.elapsed());

    match result {
        Ok(outcome) => {
            state.metrics.record_outcome(&outcome);
            exposition(state.metrics.render())
        }
        Err(response) => {
            state.metrics.record_error();
            response
        }
    }
}

fn exposition(rendered: prometheus::Result<String>) -> Response {
    match rendered {
        Ok(body) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

impl IntoResponse for ProbeError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
