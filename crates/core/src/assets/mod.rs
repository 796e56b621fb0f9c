//! Asset inventory business logic.
//!
//! Pure functions over plain values; the handler layer calls them before
//! handing DTOs to the repository.

pub mod validation;

/// Maximum length of any asset text column (`VARCHAR(255)`).
pub const MAX_TEXT_LEN: usize = 255;

/// Columns included in the asset PDF report. `serial_number` and
/// `created_at` are left out.
pub const REPORT_COLUMNS: &[&str] = &["id", "name", "category", "purchase_date"];
