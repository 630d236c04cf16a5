//! Batch pipeline stages.
//!
//! The run proceeds in order:
//! 1. **Resolve**: pick the input file (argument or working-directory discovery)
//! 2. **Ingest**: sniff the dialect and read the code table
//! 3. **Generate**: validate each code and render its link
//! 4. **Emit**: write the output CSV and optional JSON report
//!
//! Ingestion errors abort the run; per-record failures are collected and
//! never do.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::trace;

use e3link_ingest::find_default_input;
use e3link_model::{CodeRecord, GeneratedLink, RecordIssue, UrlTemplate};
use e3link_transform::generate_link;

/// Batches at least this large get a progress bar on a terminal stderr.
const PROGRESS_THRESHOLD: usize = 100;

/// Accumulated successes and failures of the generation stage, both in input
/// order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub links: Vec<GeneratedLink>,
    pub issues: Vec<RecordIssue>,
}

/// Pick the input file: the explicit argument, or the first CSV file in `dir`.
pub fn resolve_input(
    input: Option<PathBuf>,
    dir: &Path,
) -> Result<PathBuf, e3link_ingest::IngestError> {
    match input {
        Some(path) => Ok(path),
        None => find_default_input(dir),
    }
}

/// Validate every record and render links, collecting issues as they come.
///
/// Processing order equals input order; nothing is reordered or deduplicated.
pub fn generate_links(records: &[CodeRecord], template: &UrlTemplate) -> BatchOutcome {
    let progress = progress_bar(records.len());
    let mut outcome = BatchOutcome::default();
    for record in records {
        match generate_link(&record.raw, template) {
            Ok(link) => {
                trace!(row = record.row, code = %link.code, link = %link.link, "generated link");
                outcome.links.push(link);
            }
            Err(error) => {
                trace!(row = record.row, code = %record.raw, %error, "record rejected");
                outcome.issues.push(RecordIssue {
                    row: record.row,
                    kind: error.kind(),
                    message: error.to_string(),
                });
            }
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }
    outcome
}

fn progress_bar(total: usize) -> Option<ProgressBar> {
    if total < PROGRESS_THRESHOLD || !io::stderr().is_terminal() {
        return None;
    }
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} codes")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    Some(bar)
}
