//! Input file discovery for runs without an explicit path.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{IngestError, Result};

/// List all CSV files in a directory, sorted by file name.
///
/// The extension match is case-insensitive; subdirectories are not entered.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Pick the input file for a run that did not name one: the first CSV file in
/// `dir` by name order.
pub fn find_default_input(dir: &Path) -> Result<PathBuf> {
    let files = list_csv_files(dir)?;
    let Some(first) = files.into_iter().next() else {
        return Err(IngestError::NoInputFiles {
            path: dir.to_path_buf(),
        });
    };
    info!(path = %first.display(), "no input given, using first CSV file found");
    Ok(first)
}
