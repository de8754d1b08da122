use std::path::Path;

use crate::normalize::{normalize_rows, RawRow};
use crate::record::Record;
use crate::ConfigError;

/// Load a full batch of records from a JSON or YAML file of raw store rows.
///
/// The file is the unit of replacement: callers re-derive facet indexes and
/// views from the returned collection.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or is not an array of rows.
pub fn load_records(path: &Path) -> Result<Vec<Record>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RecordsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let rows: Vec<RawRow> = serde_yaml::from_str(&content).map_err(ConfigError::RecordsFileParse)?;
    let row_count = rows.len();
    let records = normalize_rows(rows);

    tracing::debug!(
        path = %path.display(),
        rows = row_count,
        records = records.len(),
        "loaded records"
    );
    Ok(records)
}
