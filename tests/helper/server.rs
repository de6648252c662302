//! Router test utilities

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use version_exporter::server::{AppState, build_router};
use version_exporter::version::checker::VersionChecker;
use version_exporter::version::fetcher::ReleaseFetcher;

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Create a router backed by the given fetcher, returning the shared state too
pub fn create_test_router(fetcher: impl ReleaseFetcher + 'static) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(VersionChecker::new(Arc::new(fetcher))).unwrap());
    (build_router(state.clone()), state)
}

/// Send a GET request through the router
pub async fn get(router: &Router, uri: &str) -> TestResponse {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}
