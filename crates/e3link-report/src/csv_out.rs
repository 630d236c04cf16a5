//! Output file emission.
//!
//! The link CSV is written through a temp file in the destination directory
//! and renamed into place, so a failed run never leaves a partial output
//! behind.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use e3link_model::{GeneratedLink, RunReport};

use crate::error::{ReportError, Result};

/// Fixed header of the emitted link file.
pub const OUTPUT_HEADER: [&str; 2] = ["SerialCode", "DynamicLink"];

/// Write the generated links to `path` as a two-column CSV, input order
/// preserved.
///
/// The caller decides whether an empty link set gets a file at all; this
/// writer emits whatever it is given (an empty slice produces a header-only
/// file).
pub fn write_links(path: &Path, links: &[GeneratedLink]) -> Result<()> {
    let dir = parent_dir(path);
    let tmp =
        NamedTempFile::new_in(&dir).map_err(|source| ReportError::write(path, source))?;
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file());
        writer
            .write_record(OUTPUT_HEADER)
            .map_err(|error| csv_error(path, &error))?;
        for link in links {
            writer
                .write_record([link.code.as_str(), link.link.as_str()])
                .map_err(|error| csv_error(path, &error))?;
        }
        writer
            .flush()
            .map_err(|source| ReportError::write(path, source))?;
    }
    tmp.persist(path)
        .map_err(|error| ReportError::write(path, error.error))?;
    Ok(())
}

/// Write the run report to `path` as pretty-printed JSON.
pub fn write_run_report_json(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|error| ReportError::Json {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    fs::write(path, json).map_err(|source| ReportError::write(path, source))
}

/// Directory the output lands in; relative bare file names write to `.` so the
/// temp file stays on the same filesystem as the target.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn csv_error(path: &Path, error: &csv::Error) -> ReportError {
    ReportError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
