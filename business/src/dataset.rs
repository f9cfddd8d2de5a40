//! Decoding of alumni record sets.

use std::path::Path;

use thiserror::Error;

use crate::AlumniRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode dataset: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decodes a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<AlumniRecord>, DatasetError> {
    let records: Vec<AlumniRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Reads and decodes the JSON dataset at `path`.
pub fn load_records(path: &Path) -> Result<Vec<AlumniRecord>, DatasetError> {
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records = parse_records(&json)?;
    log::info!("loaded {} alumni records from {}", records.len(), path.display());
    Ok(records)
}
