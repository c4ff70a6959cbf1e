//! Shared helpers for the integration tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use holonet::server::{model::app::AppState, startup::build_router};
use holonet_test_utils::TestContext;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

/// Extension trait for TestContext to create the application state & router
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// The application as served, layers & trailing slash normalization included
    fn into_router(&self) -> NormalizePath<Router>;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn into_router(&self) -> NormalizePath<Router> {
        build_router(self.into_app_state())
    }
}

/// Reads a response body as JSON
pub async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

/// Sends a request through the router returning the status & JSON body
pub async fn send(router: &NormalizePath<Router>, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed to respond");
    let status = response.status();

    (status, json_body(response).await)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn post(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    post(uri, "application/json", body)
}
