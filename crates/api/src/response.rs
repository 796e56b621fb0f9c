//! Shared response payload types for API handlers.
//!
//! Asset endpoints return the asset (or list of assets) as the bare JSON
//! body; the types here cover the remaining fixed-shape responses.

use std::path::PathBuf;

use serde::Serialize;

/// Body returned by `DELETE /assets/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self { status: "deleted" }
    }
}

/// Body returned when a detached report render has been queued.
#[derive(Debug, Serialize)]
pub struct ReportQueuedResponse {
    pub message: &'static str,
    /// Where the PDF will appear once rendering completes.
    pub file_path: PathBuf,
}
