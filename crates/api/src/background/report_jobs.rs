//! Detached PDF report renders.
//!
//! A report request is answered immediately with the target path while the
//! render runs as a one-shot task on the blocking pool. Each submission hands
//! back a completion channel the caller may await or simply drop; failures
//! are logged either way.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use assetdesk_core::report::{render_table_pdf, ReportError};
use assetdesk_db::models::asset::Asset;
use chrono::Utc;
use tokio::sync::oneshot;
use tokio_util::task::TaskTracker;

/// Why a detached render did not produce a file.
#[derive(Debug, thiserror::Error)]
pub enum ReportJobError {
    #[error(transparent)]
    Render(#[from] ReportError),

    #[error("Report task aborted: {0}")]
    Aborted(String),
}

/// Everything needed to render one report.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub records: Vec<Asset>,
    pub columns: Vec<String>,
    pub output_path: PathBuf,
    pub title: String,
}

impl ReportRequest {
    fn render(self) -> Result<PathBuf, ReportError> {
        let columns: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        render_table_pdf(&self.records, &columns, &self.output_path, &self.title)
    }
}

/// Handle to a submitted render.
#[derive(Debug)]
pub struct ReportTicket {
    /// Where the PDF will be written.
    pub file_path: PathBuf,
    /// Resolves once the render finishes. Dropping it does not cancel the job.
    pub completion: oneshot::Receiver<Result<PathBuf, ReportJobError>>,
}

/// Runs report renders detached from the requests that trigger them.
#[derive(Debug, Clone, Default)]
pub struct ReportJobs {
    tracker: TaskTracker,
}

impl ReportJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start rendering `request` in the background.
    pub fn submit(&self, request: ReportRequest) -> ReportTicket {
        let (tx, rx) = oneshot::channel();
        let file_path = request.output_path.clone();
        let record_count = request.records.len();

        self.tracker.spawn(async move {
            let started = Instant::now();
            let path = request.output_path.clone();

            let result = match tokio::task::spawn_blocking(move || request.render()).await {
                Ok(rendered) => rendered.map_err(ReportJobError::from),
                Err(join_err) => Err(ReportJobError::Aborted(join_err.to_string())),
            };

            match &result {
                Ok(_) => tracing::info!(
                    path = %path.display(),
                    record_count,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Report rendered",
                ),
                Err(e) => tracing::error!(
                    path = %path.display(),
                    record_count,
                    error = %e,
                    "Report render failed",
                ),
            }

            // The receiver may already be gone; that is the fire-and-forget case.
            let _ = tx.send(result);
        });

        ReportTicket {
            file_path,
            completion: rx,
        }
    }

    /// Number of renders still running.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Wait up to `timeout` for every submitted render to finish.
    ///
    /// Returns `false` if the timeout elapsed first. The runner keeps
    /// accepting submissions afterwards.
    pub async fn drain(&self, timeout: Duration) -> bool {
        self.tracker.close();
        let finished = tokio::time::timeout(timeout, self.tracker.wait())
            .await
            .is_ok();
        self.tracker.reopen();
        finished
    }
}

/// Build a fresh, collision-free report path inside `reports_dir`.
pub fn report_path(reports_dir: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S_%3f");
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    reports_dir.join(format!("assets_report_{stamp}_{}.pdf", &suffix[..8]))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn asset(id: i64, name: &str) -> Asset {
        Asset {
            id,
            name: name.to_string(),
            category: "Electronics".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            serial_number: Some(format!("SN-{id}")),
            created_at: Utc::now(),
        }
    }

    fn request(output_path: PathBuf, records: Vec<Asset>) -> ReportRequest {
        ReportRequest {
            records,
            columns: vec!["id".into(), "name".into()],
            output_path,
            title: "Assets Report".into(),
        }
    }

    #[tokio::test]
    async fn completion_reports_the_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("done.pdf");
        let jobs = ReportJobs::new();

        let ticket = jobs.submit(request(path.clone(), vec![asset(1, "Desk")]));
        assert_eq!(ticket.file_path, path);

        let written = ticket.completion.await.unwrap().unwrap();
        assert_eq!(written, path);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn dropped_ticket_still_renders_and_drain_waits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detached.pdf");
        let jobs = ReportJobs::new();

        drop(jobs.submit(request(path.clone(), vec![asset(1, "Desk")])));

        assert!(jobs.drain(Duration::from_secs(10)).await);
        assert_eq!(jobs.in_flight(), 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn failures_arrive_on_the_completion_channel() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let jobs = ReportJobs::new();

        let ticket = jobs.submit(request(blocker.join("report.pdf"), vec![]));

        let outcome = ticket.completion.await.unwrap();
        assert_matches!(outcome, Err(ReportJobError::Render(ReportError::Io(_))));
    }

    #[tokio::test]
    async fn runner_accepts_work_after_draining() {
        let dir = tempfile::tempdir().unwrap();
        let jobs = ReportJobs::new();
        assert!(jobs.drain(Duration::from_secs(1)).await);

        let ticket = jobs.submit(request(dir.path().join("after.pdf"), vec![]));
        assert!(ticket.completion.await.unwrap().is_ok());
    }

    #[test]
    fn report_paths_are_unique_pdfs_in_the_reports_dir() {
        let dir = Path::new("reports");
        let a = report_path(dir);
        let b = report_path(dir);

        assert_ne!(a, b);
        assert_eq!(a.parent(), Some(dir));
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some("pdf"));
        assert!(a
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("assets_report_")));
    }
}
