pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                 list, create
/// /assets/{id}            get, update, delete
/// /assets/report/pdf      start a detached PDF report render
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(assets::router())
}
