//! Handler for the asset PDF report.

use assetdesk_core::assets::REPORT_COLUMNS;
use assetdesk_db::repositories::AssetRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::background::report_jobs::{report_path, ReportRequest};
use crate::error::AppResult;
use crate::response::ReportQueuedResponse;
use crate::state::AppState;

/// GET /assets/report/pdf
///
/// Snapshot every asset and render the report in the background. Responds
/// straight away with the path the file will appear at.
pub async fn generate_asset_report(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = AssetRepo::list_all(&state.pool).await?;
    let output_path = report_path(&state.config.reports_dir);

    tracing::info!(
        record_count = records.len(),
        path = %output_path.display(),
        "Report generation started",
    );

    let ticket = state.report_jobs.submit(ReportRequest {
        records,
        columns: REPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        output_path,
        title: state.config.report_title.clone(),
    });

    Ok(Json(ReportQueuedResponse {
        message: "Report generation started",
        file_path: ticket.file_path,
    }))
}
