use std::sync::Arc;

use crate::background::report_jobs::ReportJobs;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: assetdesk_db::DbPool,
    /// Server configuration (reports directory and title are read by handlers).
    pub config: Arc<ServerConfig>,
    /// Runner for detached PDF report renders.
    pub report_jobs: ReportJobs,
}
