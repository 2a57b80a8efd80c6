//! Question catalog loading.
//!
//! The dataset is a JSON array of company-tagged rows. It is read once at
//! startup and never written back.

use std::path::Path;

use prep_core::model::{QuestionRecord, QuestionRow};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset is not a JSON array of rows: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a dataset document into validated records.
///
/// Rows that fail to deserialize or validate are skipped with a warning; the
/// remaining rows keep their file order.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the document is not a JSON array.
pub fn parse_catalog(raw: &str) -> Result<Vec<QuestionRecord>, CatalogError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = rows.len();

    let records: Vec<QuestionRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let row = match serde_json::from_value::<QuestionRow>(value) {
                Ok(row) => row,
                Err(err) => {
                    log::warn!("skipping dataset row {index}: {err}");
                    return None;
                }
            };
            match row.validate() {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("skipping dataset row {index}: {err}");
                    None
                }
            }
        })
        .collect();

    log::debug!("loaded {} of {total} dataset rows", records.len());
    Ok(records)
}

/// Read and parse the dataset at `path`.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or is not a JSON array.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>, CatalogError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    parse_catalog(&raw)
}
