//! JSON output
//!
//! Serializes extracted records as a pretty-printed JSON array.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CarouselError, Result};
use crate::types::Record;

/// Serializes records to a pretty-printed JSON array
///
/// Uses two-space indentation; non-ASCII text is written as-is.
///
/// # Errors
/// Returns `SerializeError` if serialization fails
pub fn to_json_string(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes records to `path` as pretty-printed UTF-8 JSON
///
/// Creates the file or truncates an existing one.
///
/// # Errors
/// - `SerializeError` if serialization fails
/// - `WriteError` if the file cannot be created or written
pub fn save_as_json(records: &[Record], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(records)?;

    fs::write(path, json).map_err(|source| CarouselError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Extracted data saved to {}", path.display());
    Ok(())
}
