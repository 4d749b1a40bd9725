//! Bundled-dataset archive reader.
//!
//! The static flow ships its dataset as a zip archive containing a single
//! JSON document (an array of records). Loading happens once, at startup,
//! before the view is first rendered; every failure here is fatal.

use crate::model::{ArchiveError, Dataset, Record};
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::info;
use zip::ZipArchive;

/// Read and parse the archive at `path` into a dataset.
///
/// # Errors
///
/// Returns [`ArchiveError::NotFound`] if the path does not exist, and the
/// corresponding variant for zip, I/O, and JSON failures.
pub fn open_dataset(path: &Path) -> Result<Dataset, ArchiveError> {
    if !path.exists() {
        return Err(ArchiveError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    let dataset = load_dataset(&bytes)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        "Loaded bundled dataset"
    );
    Ok(dataset)
}

/// Parse a dataset out of an in-memory zip blob.
///
/// Finds the first member whose name ends in `.json` and parses it as an
/// array of records.
///
/// # Errors
///
/// Returns [`ArchiveError::NoJsonEntry`] when the archive has no JSON
/// member; zip and JSON failures map to their own variants.
pub fn load_dataset(bytes: &[u8]) -> Result<Dataset, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let json_name = archive
        .file_names()
        .find(|name| name.ends_with(".json"))
        .map(String::from)
        .ok_or(ArchiveError::NoJsonEntry)?;

    let mut entry = archive.by_name(&json_name)?;
    let mut contents = String::with_capacity(entry.size() as usize);
    entry.read_to_string(&mut contents)?;

    let records: Vec<Record> = serde_json::from_str(&contents)?;
    Ok(Dataset::new(records))
}
