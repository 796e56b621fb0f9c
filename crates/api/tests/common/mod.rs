#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use assetdesk_api::background::report_jobs::ReportJobs;
use assetdesk_api::config::ServerConfig;
use assetdesk_api::router::build_app_router;
use assetdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults, writing reports into
/// `reports_dir`.
pub fn test_config(reports_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        reports_dir: reports_dir.to_path_buf(),
        report_title: "Assets Report".to_string(),
        db_max_connections: 5,
    }
}

/// Build an `AppState` around `pool`. Keep the returned state when a test
/// needs to wait on report jobs.
pub fn build_test_state(pool: PgPool, reports_dir: &Path) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config(reports_dir)),
        report_jobs: ReportJobs::new(),
    }
}

/// Build the full application router from `state`, with the same middleware
/// stack production uses.
pub fn build_test_app(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    build_app_router(state, &config)
}

/// Shorthand for apps that never render a report.
pub fn build_app(pool: PgPool) -> Router {
    build_test_app(build_test_state(pool, &std::env::temp_dir()))
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}
