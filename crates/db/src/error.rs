//! Repository error type.
//!
//! Write failures are classified from the PostgreSQL SQLSTATE: a unique
//! violation on the serial-number constraint becomes
//! [`RepoError::DuplicateKey`] naming the offending value; every other
//! integrity-class (`23xxx`) violation becomes the generic
//! [`RepoError::IntegrityViolation`].

/// Name of the unique constraint on `assets.serial_number`.
pub const SERIAL_NUMBER_CONSTRAINT: &str = "uq_assets_serial_number";

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE class prefix for integrity constraint violations.
const INTEGRITY_CLASS: &str = "23";

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Asset with serial number '{serial_number}' already exists.")]
    DuplicateKey { serial_number: String },

    #[error("Integrity error while writing asset.")]
    IntegrityViolation,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Classify an error returned by an INSERT or UPDATE.
    ///
    /// `serial_number` is the value the write tried to store, used to name
    /// the duplicate. A serial-number collision without a known value is
    /// reported as a generic integrity violation.
    pub fn from_write(err: sqlx::Error, serial_number: Option<&str>) -> Self {
        let sqlx::Error::Database(db_err) = &err else {
            return RepoError::Database(err);
        };

        let code = db_err.code();
        let code = code.as_deref().unwrap_or_default();

        if code == UNIQUE_VIOLATION && db_err.constraint() == Some(SERIAL_NUMBER_CONSTRAINT) {
            return match serial_number {
                Some(serial) => RepoError::DuplicateKey {
                    serial_number: serial.to_string(),
                },
                None => RepoError::IntegrityViolation,
            };
        }

        if code.starts_with(INTEGRITY_CLASS) {
            tracing::warn!(error = %db_err, "Integrity violation on asset write");
            return RepoError::IntegrityViolation;
        }

        RepoError::Database(err)
    }
}
