//! `/health` and the behaviour every route shares through the middleware
//! stack (request ids, CORS, fallback 404).

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn healthy_when_database_and_reports_dir_are_usable(pool: PgPool) {
    let reports = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::build_test_state(pool, reports.path()));

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["reports_writable"], true);
    assert_eq!(json["report_jobs_in_flight"], 0);
    assert!(json["version"].is_string());

    // The writability check cleans up after itself.
    assert_eq!(std::fs::read_dir(reports.path()).unwrap().count(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn degraded_when_reports_dir_cannot_be_written(pool: PgPool) {
    let scratch = tempfile::tempdir().unwrap();
    let not_a_dir = scratch.path().join("reports");
    std::fs::write(&not_a_dir, b"occupied").unwrap();
    let app = common::build_test_app(common::build_test_state(pool, &not_a_dir));

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["reports_writable"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unmatched_paths_fall_through_to_404(pool: PgPool) {
    for path in ["/nope", "/assets/1/extra", "/health/db"] {
        let response = get(common::build_app(pool.clone()), path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn request_id_is_generated_or_echoed(pool: PgPool) {
    let generated = get(common::build_app(pool.clone()), "/assets/").await;
    let id = generated.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(id.len(), 36, "generated ids are hyphenated UUIDs");

    let request = Request::builder()
        .uri("/assets/")
        .header("x-request-id", "client-supplied-7")
        .body(Body::empty())
        .unwrap();
    let echoed = common::build_app(pool).oneshot(request).await.unwrap();
    assert_eq!(echoed.headers()["x-request-id"], "client-supplied-7");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_the_configured_origin(pool: PgPool) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/assets/")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = common::build_app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}
