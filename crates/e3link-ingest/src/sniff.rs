//! Delimiter detection from a leading sample of the input file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Delimiter assumed when detection is inconclusive.
pub const DEFAULT_DELIMITER: u8 = b',';

/// How many leading bytes of the file the sniffer inspects.
pub const SAMPLE_LEN: usize = 1024;

/// Field delimiters the sniffer considers, in preference order.
pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Read the leading sample of `path` for delimiter detection.
pub fn read_sample(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let mut sample = Vec::with_capacity(SAMPLE_LEN);
    file.take(SAMPLE_LEN as u64)
        .read_to_end(&mut sample)
        .map_err(|source| IngestError::io(path, source))?;
    Ok(sample)
}

/// Infer the field delimiter from a leading sample.
///
/// A candidate wins when it appears the same number of times (at least once) on
/// every sampled line; ties go to the candidate with more fields per line, then
/// to candidate order. Returns `None` when no candidate is consistent, leaving
/// the fallback to the caller. Invalid UTF-8 and truncated samples are
/// tolerated, never an error.
pub fn detect_delimiter(sample: &[u8]) -> Option<u8> {
    let text = String::from_utf8_lossy(sample);
    let mut lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    // A full-length sample usually ends mid-line; ignore the partial tail.
    if sample.len() >= SAMPLE_LEN && !text.ends_with('\n') && lines.len() > 1 {
        lines.pop();
    }
    if lines.is_empty() {
        return None;
    }
    let mut best: Option<(u8, usize)> = None;
    for candidate in DELIMITER_CANDIDATES {
        let Some(count) = consistent_count(&lines, candidate) else {
            continue;
        };
        if count == 0 {
            continue;
        }
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((candidate, count));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Human-readable name for a delimiter byte.
pub fn delimiter_name(delimiter: u8) -> &'static str {
    match delimiter {
        b',' => "comma",
        b'\t' => "tab",
        b';' => "semicolon",
        b'|' => "pipe",
        _ => "other",
    }
}

/// Occurrences per line if identical across all lines, else `None`.
fn consistent_count(lines: &[&str], delimiter: u8) -> Option<usize> {
    let mut counts = lines
        .iter()
        .map(|line| line.bytes().filter(|&byte| byte == delimiter).count());
    let first = counts.next()?;
    if counts.all(|count| count == first) {
        Some(first)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_comma() {
        assert_eq!(detect_delimiter(b"SerialCode,Batch\nEAVO53,1\n"), Some(b','));
    }

    #[test]
    fn detects_tab_semicolon_pipe() {
        assert_eq!(detect_delimiter(b"a\tb\nc\td\n"), Some(b'\t'));
        assert_eq!(detect_delimiter(b"a;b\nc;d\n"), Some(b';'));
        assert_eq!(detect_delimiter(b"a|b\nc|d\n"), Some(b'|'));
    }

    #[test]
    fn single_column_is_inconclusive() {
        assert_eq!(detect_delimiter(b"EAVO53\nE9RIU3\n"), None);
    }

    #[test]
    fn inconsistent_counts_are_inconclusive() {
        assert_eq!(detect_delimiter(b"a,b,c\nd,e\nf\n"), None);
    }

    #[test]
    fn empty_sample_is_inconclusive() {
        assert_eq!(detect_delimiter(b""), None);
        assert_eq!(detect_delimiter(b"\n\n  \n"), None);
    }

    #[test]
    fn malformed_bytes_do_not_panic() {
        assert_eq!(detect_delimiter(&[0xff, 0xfe, 0x00, 0x41]), None);
    }

    #[test]
    fn truncated_tail_line_is_ignored() {
        let mut sample = b"a;b\nc;d\n".repeat(SAMPLE_LEN / 8);
        sample.truncate(SAMPLE_LEN - 2);
        sample.extend_from_slice(b"x,y,z");
        let mut padded = sample;
        padded.truncate(SAMPLE_LEN);
        assert_eq!(detect_delimiter(&padded), Some(b';'));
    }

    #[test]
    fn higher_field_count_wins_ties() {
        // Both ',' and ';' are consistent; ',' splits more fields.
        assert_eq!(detect_delimiter(b"a,b,c;d\ne,f,g;h\n"), Some(b','));
    }
}
