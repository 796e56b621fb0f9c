//! Tabular PDF reports.
//!
//! [`render_table_pdf`] projects each record through [`FieldSource`], lays
//! the cells out on fixed A4 pages ([`layout`]) and writes the encoded
//! document to disk in one step.

pub mod layout;
pub mod metrics;
mod pdf;
pub mod source;

use std::path::{Path, PathBuf};

pub use source::FieldSource;

/// Report rendering error type.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report needs at least one column")]
    NoColumns,

    #[error("PDF encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render `records` as a table with one column per entry of `columns` and
/// write the PDF to `output_path`.
///
/// Either a complete file ends up at `output_path` or none does: the
/// document is written to a sibling `.part` file and renamed into place.
/// Returns the path that was written.
pub fn render_table_pdf<R: FieldSource>(
    records: &[R],
    columns: &[&str],
    output_path: &Path,
    title: &str,
) -> Result<PathBuf, ReportError> {
    if columns.is_empty() {
        return Err(ReportError::NoColumns);
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| source::project(record, columns))
        .collect();

    let pages = layout::layout_table(title, columns, &rows);
    let bytes = pdf::encode(&pages)?;
    pdf::write_atomically(output_path, &bytes)?;

    Ok(output_path.to_path_buf())
}
