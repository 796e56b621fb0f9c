//! Repository for the `assets` table.
//!
//! Uniqueness of `serial_number` is left to the database constraint; there
//! is no read-before-write, so a concurrent duplicate is caught at commit
//! and surfaces as [`RepoError::DuplicateKey`].

use assetdesk_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::asset::{Asset, CreateAsset, UpdateAsset};

/// Column list for `assets` queries.
const COLUMNS: &str = "id, name, category, purchase_date, serial_number, created_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the row with its generated `id` and
    /// `created_at`.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, RepoError> {
        let query = format!(
            "INSERT INTO assets (name, category, purchase_date, serial_number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.purchase_date)
            .bind(input.serial_number.as_deref())
            .fetch_one(pool)
            .await
            .map_err(|e| RepoError::from_write(e, input.serial_number.as_deref()))
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        let asset = sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(asset)
    }

    /// List every asset in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Asset>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY id");
        let assets = sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await?;
        Ok(assets)
    }

    /// Partially update an asset. Returns `None` if no asset has this `id`.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `serial_number`
    /// uses `Option<Option<String>>` so an explicit `null` clears it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, RepoError> {
        let serial_provided = input.serial_number.is_some();
        let serial_value = input.new_serial_number();

        let query = format!(
            "UPDATE assets SET \
                 name          = COALESCE($2, name), \
                 category      = COALESCE($3, category), \
                 purchase_date = COALESCE($4, purchase_date), \
                 serial_number = CASE WHEN $5 THEN $6 ELSE serial_number END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.category.as_deref())
            .bind(input.purchase_date)
            .bind(serial_provided)
            .bind(serial_value)
            .fetch_optional(pool)
            .await
            .map_err(|e| RepoError::from_write(e, serial_value))
    }

    /// Delete an asset by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
