//! Route definitions for the asset inventory.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, reports};
use crate::state::AppState;

/// Asset routes. The collection is served both with and without the
/// trailing slash.
///
/// ```text
/// GET    /assets/            -> list_assets
/// POST   /assets/            -> create_asset
/// GET    /assets/report/pdf  -> generate_asset_report
/// GET    /assets/{id}        -> get_asset
/// PUT    /assets/{id}        -> update_asset
/// DELETE /assets/{id}        -> delete_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/assets",
            get(assets::list_assets).post(assets::create_asset),
        )
        .route(
            "/assets/",
            get(assets::list_assets).post(assets::create_asset),
        )
        .route("/assets/report/pdf", get(reports::generate_asset_report))
        .route(
            "/assets/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
}
