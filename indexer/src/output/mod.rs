//! JSON output.
//!
//! The document is rendered fully in memory, pretty-printed with two-space
//! indentation and non-ASCII text left unescaped, then written in one go.
//! A failure during the write can leave a truncated file behind.

use std::fs;
use std::path::Path;

use crate::error::{ConversionError, ConversionResult};
use crate::models::{Dataset, DatasetDocument};

/// Render the dataset as pretty JSON.
pub fn to_json_pretty(dataset: &Dataset) -> ConversionResult<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Write the dataset to `path`, replacing any existing file.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> ConversionResult<()> {
    let json = to_json_pretty(dataset)?;
    fs::write(path, json).map_err(|e| ConversionError::write(path, e))
}

/// Read a written document back.
pub fn read_document(path: &Path) -> ConversionResult<DatasetDocument> {
    let content = fs::read_to_string(path).map_err(|e| ConversionError::read(path, e))?;
    Ok(serde_json::from_str(&content)?)
}
