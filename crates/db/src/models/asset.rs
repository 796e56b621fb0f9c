//! Asset inventory models and DTOs.

use assetdesk_core::report::FieldSource;
use assetdesk_core::serde_helpers::deserialize_some;
use assetdesk_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `assets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub purchase_date: Date,
    pub serial_number: Option<String>,
    pub created_at: Timestamp,
}

impl FieldSource for Asset {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.clone()),
            "purchase_date" => Some(self.purchase_date.format("%Y-%m-%d").to_string()),
            "serial_number" => self.serial_number.clone(),
            "created_at" => Some(self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new asset. `id` and `created_at` are assigned by the
/// database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub name: String,
    pub category: String,
    pub purchase_date: Date,
    pub serial_number: Option<String>,
}

/// DTO for partially updating an asset.
///
/// `name`, `category` and `purchase_date` are non-nullable: absent and
/// `null` both keep the stored value. `serial_number` distinguishes the
/// two: absent keeps it, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub category: Option<String>,
    pub purchase_date: Option<Date>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub serial_number: Option<Option<String>>,
}

impl UpdateAsset {
    /// The serial number this update writes, if it writes a non-null one.
    pub fn new_serial_number(&self) -> Option<&str> {
        self.serial_number.as_ref().and_then(|v| v.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn sample() -> Asset {
        Asset {
            id: 42,
            name: "MacBook Pro".to_string(),
            category: "Electronics".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            serial_number: None,
            created_at: Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap(),
        }
    }

    #[test]
    fn projects_every_column() {
        let asset = sample();
        assert_eq!(asset.field("id").as_deref(), Some("42"));
        assert_eq!(asset.field("name").as_deref(), Some("MacBook Pro"));
        assert_eq!(asset.field("category").as_deref(), Some("Electronics"));
        assert_eq!(asset.field("purchase_date").as_deref(), Some("2024-01-01"));
        assert_eq!(asset.field("serial_number"), None);
        assert_eq!(
            asset.field("created_at").as_deref(),
            Some("2024-02-03 04:05:06")
        );
        assert_eq!(asset.field("colour"), None);
    }

    #[test]
    fn struct_and_map_projections_agree() {
        let asset = sample();
        let json = serde_json::to_value(&asset).unwrap();
        let map = json.as_object().unwrap();

        for column in ["id", "name", "category", "purchase_date", "serial_number"] {
            assert_eq!(asset.field(column), map.field(column), "{column}");
        }
    }

    #[test]
    fn update_distinguishes_absent_from_null_serial() {
        let absent: UpdateAsset = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(absent.name.as_deref(), Some("X"));
        assert_eq!(absent.serial_number, None);

        let cleared: UpdateAsset = serde_json::from_str(r#"{"serial_number": null}"#).unwrap();
        assert_eq!(cleared.serial_number, Some(None));
        assert_eq!(cleared.new_serial_number(), None);

        let replaced: UpdateAsset =
            serde_json::from_str(r#"{"serial_number": "SN-2"}"#).unwrap();
        assert_eq!(replaced.new_serial_number(), Some("SN-2"));
    }

    #[test]
    fn create_accepts_iso_dates_and_optional_serial() {
        let input: CreateAsset = serde_json::from_str(
            r#"{"name": "Desk", "category": "Furniture", "purchase_date": "2023-06-30"}"#,
        )
        .unwrap();
        assert_eq!(input.purchase_date, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
        assert_eq!(input.serial_number, None);
    }
}
