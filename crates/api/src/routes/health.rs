//! Liveness and dependency health.
//!
//! The service depends on two things outside the process: PostgreSQL and a
//! writable reports directory. Either one failing turns the status to
//! `degraded`; the endpoint itself always answers 200.

use std::path::Path;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every dependency is usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether a report could be written into the reports directory now.
    pub reports_writable: bool,
    pub report_jobs_in_flight: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = assetdesk_db::health_check(&state.pool).await.is_ok();
    let reports_writable = reports_dir_writable(&state.config.reports_dir).await;

    if !reports_writable {
        tracing::warn!(
            reports_dir = %state.config.reports_dir.display(),
            "Reports directory is not writable",
        );
    }

    Json(HealthResponse {
        status: if db_healthy && reports_writable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        reports_writable,
        report_jobs_in_flight: state.report_jobs.in_flight(),
    })
}

/// Create and remove a scratch file in `dir`. Directory metadata alone does
/// not reveal read-only mounts or a full disk.
async fn reports_dir_writable(dir: &Path) -> bool {
    let scratch = dir.join(format!(".health-{}", uuid::Uuid::new_v4().simple()));
    match tokio::fs::write(&scratch, b"").await {
        Ok(()) => {
            let _ = tokio::fs::remove_file(&scratch).await;
            true
        }
        Err(_) => false,
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
