//! Identifier List I/O
//!
//! Reads the id list the run operates on and writes the resolved path
//! listing.

use crate::error::SetupError;
use crate::types::{FileId, ResolvedEntry};
use std::fs;
use std::path::Path;

/// Read candidate file ids, one per line. Lines that are not purely digits
/// (blank lines, stray text, signed numbers) are ignored.
pub fn read_file_ids(path: &Path) -> Result<Vec<FileId>, SetupError> {
    let content = fs::read_to_string(path).map_err(|e| SetupError::IdList {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(content.lines().filter_map(parse_id_line).collect())
}

fn parse_id_line(line: &str) -> Option<FileId> {
    let line = line.trim();
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

/// Write the resolved mapping, one `File ID: <id>, Path: <path>` line per
/// entry in input order. Unresolved entries record `None` as the path.
pub fn write_paths(path: &Path, entries: &[ResolvedEntry]) -> Result<(), SetupError> {
    let lines: String = entries
        .iter()
        .map(|e| {
            format!(
                "File ID: {}, Path: {}\n",
                e.id,
                e.path.as_deref().unwrap_or("None")
            )
        })
        .collect();
    fs::write(path, lines).map_err(|e| SetupError::Output {
        path: path.to_path_buf(),
        source: e,
    })
}
