//! Record types flowing through the link generation pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A raw serial code token read from one row of the input file.
///
/// The row number is 1-based and counts every physical row of the source file,
/// including a detected header row, so issues can point back at the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    pub raw: String,
    pub row: u64,
}

/// A successfully generated (code, link) pair.
///
/// The code is always the trimmed form of the input record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLink {
    pub code: String,
    pub link: String,
}

/// Why a record failed validation or templating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyCode,
    InvalidCharacters,
    Template,
}

/// A per-record failure: source row, typed kind, human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordIssue {
    pub row: u64,
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

/// Serializable summary of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub template: String,
    pub generated: usize,
    pub issues: Vec<RecordIssue>,
}

impl RunReport {
    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    /// Total non-empty input records the run saw.
    pub fn record_count(&self) -> usize {
        self.generated + self.issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_display_includes_row() {
        let issue = RecordIssue {
            row: 4,
            kind: IssueKind::InvalidCharacters,
            message: "invalid characters in serial code: bad code!".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "row 4: invalid characters in serial code: bad code!"
        );
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = RunReport {
            input: "serial_codes.csv".into(),
            output: Some("dynamic_links.csv".into()),
            template: "https://{code}/e3world.co.uk".to_string(),
            generated: 2,
            issues: vec![RecordIssue {
                row: 3,
                kind: IssueKind::EmptyCode,
                message: "empty serial code".to_string(),
            }],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: RunReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.generated, 2);
        assert_eq!(round.record_count(), 3);
        assert_eq!(round.issues[0].kind, IssueKind::EmptyCode);
    }
}
