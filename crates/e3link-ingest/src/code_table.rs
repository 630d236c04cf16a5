//! Reading a single-column table of serial codes from a delimited file.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use e3link_model::CodeRecord;

use crate::error::{IngestError, Result};
use crate::sniff::{DEFAULT_DELIMITER, detect_delimiter, read_sample};

/// First-cell substrings that mark the first row as a header.
const HEADER_HINTS: [&str; 5] = ["serial", "code", "id", "tag", "number"];

/// Options for reading a code table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Explicit field delimiter; skips sniffing when set.
    pub delimiter: Option<u8>,
}

/// Parsed input file: detected dialect plus the ordered code records.
#[derive(Debug, Clone)]
pub struct CodeTable {
    /// Field delimiter the file was parsed with.
    pub delimiter: u8,
    /// Cells of the header row, when one was detected and skipped.
    pub header: Option<Vec<String>>,
    /// Non-empty first-column tokens in input order, with 1-based source rows.
    pub records: Vec<CodeRecord>,
}

/// Read the code table at `path`, sniffing the delimiter from a leading sample.
pub fn read_code_table(path: &Path) -> Result<CodeTable> {
    read_code_table_with_options(path, IngestOptions::default())
}

/// Read the code table at `path` with explicit options.
///
/// Fails with [`IngestError::NotFound`] when the path does not exist and
/// [`IngestError::EmptyInput`] when the file parses to zero rows. Rows whose
/// first cell trims to empty are skipped silently; they still advance the row
/// numbering, which counts every physical row of the file.
pub fn read_code_table_with_options(path: &Path, options: IngestOptions) -> Result<CodeTable> {
    if !path.exists() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let delimiter = match options.delimiter {
        Some(delimiter) => delimiter,
        None => {
            let sample = read_sample(path)?;
            detect_delimiter(&sample).unwrap_or(DEFAULT_DELIMITER)
        }
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;

    let mut rows: Vec<(u64, Vec<String>)> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        let row_number = record
            .position()
            .map_or(index as u64 + 1, |position| position.line());
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        rows.push((row_number, cells));
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let header = if rows.len() > 1 && rows[0].1.first().is_some_and(|cell| is_header_cell(cell)) {
        let (_, cells) = rows.remove(0);
        Some(cells)
    } else {
        None
    };

    let mut records = Vec::with_capacity(rows.len());
    for (row_number, cells) in rows {
        let Some(first) = cells.first() else {
            continue;
        };
        if first.is_empty() {
            continue;
        }
        records.push(CodeRecord {
            raw: first.clone(),
            row: row_number,
        });
    }

    debug!(
        path = %path.display(),
        delimiter = %(delimiter as char),
        header = header.is_some(),
        records = records.len(),
        "parsed input file"
    );

    Ok(CodeTable {
        delimiter,
        header,
        records,
    })
}

/// True when a first-row cell looks like a column heading rather than a code.
pub fn is_header_cell(cell: &str) -> bool {
    let lowered = cell.to_lowercase();
    HEADER_HINTS.iter().any(|hint| lowered.contains(hint))
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
