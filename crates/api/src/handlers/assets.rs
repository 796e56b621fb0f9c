//! Handlers for asset CRUD.
//!
//! Absence is a value from the repository (`None` / `false`); this layer
//! turns it into a 404.

use assetdesk_core::assets::validation::{validate_asset_patch, validate_new_asset};
use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use assetdesk_db::models::asset::{CreateAsset, UpdateAsset};
use assetdesk_db::repositories::AssetRepo;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DeletedResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Asset", id })
}

/// POST /assets
///
/// Create an asset. A serial number already in use is rejected with 400.
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    validate_new_asset(&input.name, &input.category, input.serial_number.as_deref())?;

    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        asset_id = asset.id,
        name = %asset.name,
        category = %asset.category,
        "Asset created",
    );

    Ok(Json(asset))
}

/// GET /assets
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list_all(&state.pool).await?;
    Ok(Json(assets))
}

/// GET /assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(asset))
}

/// PUT /assets/{id}
///
/// Apply only the fields present in the body.
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    validate_asset_patch(
        input.name.as_deref(),
        input.category.as_deref(),
        input.new_serial_number(),
    )?;

    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(asset_id = asset.id, "Asset updated");

    Ok(Json(asset))
}

/// DELETE /assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AssetRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(asset_id = id, "Asset deleted");

    Ok(Json(DeletedResponse::default()))
}
