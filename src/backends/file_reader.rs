//! Source file reading
//!
//! Files are read whole. Content that is not valid UTF-8 is converted
//! lossily (invalid bytes become U+FFFD) rather than rejected, so one odd
//! byte does not drop an otherwise readable file.

use std::fs;
use std::path::Path;

use crate::core::error::ScanError;

/// Read the full text of a source file
pub fn read_source(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("{} is not valid UTF-8, reading lossily", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}
