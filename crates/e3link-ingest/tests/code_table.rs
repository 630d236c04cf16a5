//! Tests for code table reading: dialect, headers, row numbering.

use std::fs;

use e3link_ingest::{IngestError, IngestOptions, read_code_table, read_code_table_with_options};
use tempfile::tempdir;

fn codes(table: &e3link_ingest::CodeTable) -> Vec<(&str, u64)> {
    table
        .records
        .iter()
        .map(|record| (record.raw.as_str(), record.row))
        .collect()
}

#[test]
fn header_row_is_detected_and_skipped() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("serial_codes.csv");
    fs::write(&path, "SerialCode\nABC-123\n\nbad code!\nXYZ_9\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert_eq!(table.header.as_deref(), Some(&["SerialCode".to_string()][..]));
    // The blank line is skipped silently but still counts in row numbers.
    assert_eq!(
        codes(&table),
        vec![("ABC-123", 2), ("bad code!", 4), ("XYZ_9", 5)]
    );
}

#[test]
fn single_row_is_never_treated_as_header() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("one.csv");
    fs::write(&path, "CODE-1\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert!(table.header.is_none());
    assert_eq!(codes(&table), vec![("CODE-1", 1)]);
}

#[test]
fn first_data_row_without_hints_is_kept() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plain.csv");
    fs::write(&path, "EAVO53\nE9RIU3\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert!(table.header.is_none());
    assert_eq!(codes(&table), vec![("EAVO53", 1), ("E9RIU3", 2)]);
}

#[test]
fn semicolon_delimiter_is_sniffed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("semi.csv");
    fs::write(&path, "Tag;Batch\nEAVO53;1\nE9RIU3;2\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert_eq!(table.delimiter, b';');
    assert_eq!(
        table.header.as_deref(),
        Some(&["Tag".to_string(), "Batch".to_string()][..])
    );
    assert_eq!(codes(&table), vec![("EAVO53", 2), ("E9RIU3", 3)]);
}

#[test]
fn tab_delimiter_is_sniffed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tabs.csv");
    fs::write(&path, "id\tname\nE1\tfirst\nE2\tsecond\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert_eq!(table.delimiter, b'\t');
    assert_eq!(codes(&table), vec![("E1", 2), ("E2", 3)]);
}

#[test]
fn explicit_delimiter_overrides_sniffing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("override.csv");
    fs::write(&path, "E1|a\nE2|b\n").expect("write input");

    let options = IngestOptions {
        delimiter: Some(b','),
    };
    let table = read_code_table_with_options(&path, options).expect("read table");

    assert_eq!(table.delimiter, b',');
    assert_eq!(codes(&table), vec![("E1|a", 1), ("E2|b", 2)]);
}

#[test]
fn whitespace_cells_are_skipped_silently() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gaps.csv");
    fs::write(&path, "  \n E1 \n,second-column-only\nE2\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    // Trimmed-empty first cells drop out without shifting later row numbers.
    assert_eq!(codes(&table), vec![("E1", 2), ("E2", 4)]);
}

#[test]
fn bom_is_stripped_from_first_cell() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bom.csv");
    fs::write(&path, "\u{feff}SerialCode\nE1\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert_eq!(table.header.as_deref(), Some(&["SerialCode".to_string()][..]));
    assert_eq!(codes(&table), vec![("E1", 2)]);
}

#[test]
fn missing_file_is_a_not_found_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.csv");

    let error = read_code_table(&path).expect_err("missing file");
    assert!(matches!(error, IngestError::NotFound { .. }));
}

#[test]
fn empty_file_is_an_empty_input_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").expect("write input");

    let error = read_code_table(&path).expect_err("empty file");
    assert!(matches!(error, IngestError::EmptyInput { .. }));
}

#[test]
fn emitted_output_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("links.csv");
    fs::write(
        &path,
        "SerialCode,DynamicLink\n\
         EAVO53,https://EAVO53/e3world.co.uk\n\
         E9RIU3,https://E9RIU3/e3world.co.uk\n",
    )
    .expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert!(table.header.is_some());
    assert_eq!(codes(&table), vec![("EAVO53", 2), ("E9RIU3", 3)]);
}

#[test]
fn duplicates_are_preserved_in_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("dupes.csv");
    fs::write(&path, "E1\nE1\nE2\nE1\n").expect("write input");

    let table = read_code_table(&path).expect("read table");

    assert_eq!(
        codes(&table),
        vec![("E1", 1), ("E1", 2), ("E2", 3), ("E1", 4)]
    );
}
