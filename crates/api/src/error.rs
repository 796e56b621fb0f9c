use assetdesk_core::error::CoreError;
use assetdesk_db::error::RepoError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`RepoError`] for persistence
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `assetdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A classified repository error from `assetdesk_db`.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Repository errors ---
            AppError::Repo(repo) => match repo {
                RepoError::DuplicateKey { .. } => {
                    (StatusCode::BAD_REQUEST, "DUPLICATE_KEY", repo.to_string())
                }
                RepoError::IntegrityViolation => {
                    (StatusCode::BAD_REQUEST, "INTEGRITY_ERROR", repo.to_string())
                }
                RepoError::Database(err) => internal_database_error(err),
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Log an unclassified sqlx error and answer with a sanitized 500.
fn internal_database_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
